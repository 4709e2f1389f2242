use crate::models::Comment;

/// Collapse comments whose line ranges touch or are at most one line apart.
///
/// Runs of `//` or `#` comments on consecutive lines come out of the lexer as
/// separate items; after this pass they form one logical comment. Comments
/// separated by a gap of two or more lines stay apart, which makes the pass
/// idempotent.
pub fn collapse_comments(comments: Vec<Comment>) -> Vec<Comment> {
    collapse_ranked(comments.into_iter().enumerate().collect())
        .into_iter()
        .map(|(_, comment)| comment)
        .collect()
}

/// [`collapse_comments`] over comments tagged with their discovery rank.
///
/// A merged comment carries the rank of its last fragment, the one that
/// decides its end line.
pub fn collapse_ranked(comments: Vec<(usize, Comment)>) -> Vec<(usize, Comment)> {
    let mut result = Vec::with_capacity(comments.len());
    let mut iter = comments.into_iter();

    let Some((mut rank, mut current)) = iter.next() else {
        return result;
    };

    for (next_rank, next) in iter {
        if next.start_line <= current.end_line + 1 {
            current.append(next);
        } else {
            result.push((rank, std::mem::replace(&mut current, next)));
        }
        rank = next_rank;
    }
    result.push((rank, current));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(collapse_comments(Vec::new()).is_empty());
    }

    #[test]
    fn test_adjacent_lines_merge() {
        let merged = collapse_comments(vec![Comment::single("a", 1), Comment::single("b", 2)]);
        assert_eq!(merged, vec![Comment::new(vec!["a".into(), "b".into()], 1, 2)]);
        assert!(merged[0].is_multiline());
    }

    #[test]
    fn test_gap_of_two_stays_apart() {
        let merged = collapse_comments(vec![Comment::single("a", 1), Comment::single("b", 3)]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_block_then_line_comment_merge() {
        let merged = collapse_comments(vec![
            Comment::new(vec!["x".into(), "y".into()], 1, 2),
            Comment::single("z", 3),
            Comment::single("far", 10),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].body, vec!["x", "y", "z"]);
        assert_eq!((merged[0].start_line, merged[0].end_line), (1, 3));
        assert_eq!(merged[1], Comment::single("far", 10));
    }

    #[test]
    fn test_same_line_comments_merge() {
        // Markup comments sharing a line
        let merged = collapse_comments(vec![Comment::single("a", 4), Comment::single("b", 4)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].body, vec!["a", "b"]);
        assert_eq!((merged[0].start_line, merged[0].end_line), (4, 4));
        assert!(merged[0].is_multiline());
    }

    #[test]
    fn test_ranked_keeps_last_fragment_rank() {
        let merged = collapse_ranked(vec![
            (0, Comment::single("a", 1)),
            (2, Comment::single("b", 2)),
            (5, Comment::single("c", 9)),
        ]);
        let ranks: Vec<usize> = merged.iter().map(|(rank, _)| *rank).collect();
        assert_eq!(ranks, vec![2, 5]);
        assert_eq!(merged[0].1.body, vec!["a", "b"]);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            Comment::single("a", 1),
            Comment::single("b", 2),
            Comment::single("c", 5),
            Comment::new(vec!["d".into(), "e".into()], 6, 7),
            Comment::single("f", 20),
        ];
        let once = collapse_comments(input);
        let twice = collapse_comments(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }
}
