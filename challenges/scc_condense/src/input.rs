use crate::Scanner;
use crate::error::ParseError;
use crate::graph::Graph;

/// Splits a line into integers at number boundaries.
///
/// Whitespace separates tokens, and a token also ends at the first character that
/// is not a digit, so `"1-2"` yields `[1, -2]`. Returns `None` for any other
/// character, a sign without digits, or a value that does not fit in an `i32`.
pub fn parse_int_line(line: &str) -> Option<Vec<i32>> {
    let bytes = line.as_bytes();
    let mut values = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos].is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let start = pos;
        if bytes[pos] == b'+' || bytes[pos] == b'-' {
            pos += 1;
        }
        let digits = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits {
            return None;
        }

        values.push(line[start..pos].parse().ok()?);
    }

    Some(values)
}

/// Reads the `<nodes> <edges>` header and then one `<u> <v>` edge per line until
/// end of input.
pub fn read_graph(input: &mut Scanner) -> Result<Graph, ParseError> {
    let Some(header) = input.next_line()? else {
        return Err(ParseError::MissingHeader);
    };

    let (nodes, edges) = match parse_int_line(&header).as_deref() {
        Some([nodes, edges, ..]) => (*nodes, *edges),
        _ => return Err(ParseError::InvalidHeader(header)),
    };
    if nodes <= 0 {
        return Err(ParseError::NoNodes);
    }
    if edges < 0 {
        return Err(ParseError::NegativeEdges);
    }

    let mut graph = Graph::new(nodes as usize);

    while let Some(line) = input.next_line()? {
        let (u, v) = match parse_int_line(&line).as_deref() {
            Some(&[u, v]) => (u, v),
            _ => return Err(ParseError::InvalidEdge(line)),
        };

        let (Some(source), Some(target)) =
            (graph.index_of(i64::from(u)), graph.index_of(i64::from(v)))
        else {
            return Err(ParseError::InvalidNode(line));
        };

        graph.add_edge(source, target);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Graph, ParseError> {
        read_graph(&mut Scanner::new(Cursor::new(input.to_string())))
    }

    #[test]
    fn tokenizer_splits_on_whitespace_and_signs() {
        assert_eq!(parse_int_line("3 2"), Some(vec![3, 2]));
        assert_eq!(parse_int_line("  7\t-4  "), Some(vec![7, -4]));
        assert_eq!(parse_int_line("1-2"), Some(vec![1, -2]));
        assert_eq!(parse_int_line("+5"), Some(vec![5]));
        assert_eq!(parse_int_line(""), Some(vec![]));
    }

    #[test]
    fn tokenizer_rejects_garbage() {
        assert_eq!(parse_int_line("1 x"), None);
        assert_eq!(parse_int_line("1 2a"), None);
        assert_eq!(parse_int_line("-"), None);
        assert_eq!(parse_int_line("1 99999999999"), None);
    }

    #[test]
    fn reads_nodes_and_edges() {
        let g = read("3 2\n1 2\n2 3\n").unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors_of(0), &[1]);
        assert_eq!(g.neighbors_of(1), &[2]);
    }

    #[test]
    fn header_needs_two_integers() {
        let err = read("3\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid graph line provided: \"3\"");

        let err = read("three 2\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidHeader(line) if line == "three 2"));

        assert!(matches!(read("").unwrap_err(), ParseError::MissingHeader));
    }

    #[test]
    fn header_ignores_integers_after_the_second() {
        let g = read("3 2 7\n1 2\n2 3\n").unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);

        assert_eq!(
            read("3 -1 7\n").unwrap_err().to_string(),
            "amount of edges is less than 0"
        );
    }

    #[test]
    fn header_counts_are_checked() {
        assert_eq!(
            read("0 2\n").unwrap_err().to_string(),
            "amount of nodes specified is 0"
        );
        assert_eq!(
            read("-4 2\n").unwrap_err().to_string(),
            "amount of nodes specified is 0"
        );
        assert_eq!(
            read("3 -1\n").unwrap_err().to_string(),
            "amount of edges is less than 0"
        );
    }

    #[test]
    fn edge_lines_must_be_pairs() {
        assert_eq!(
            read("3 1\n1\n").unwrap_err().to_string(),
            "invalid graph edge: \"1\""
        );
        assert_eq!(
            read("3 1\n1 2 3\n").unwrap_err().to_string(),
            "invalid graph edge: \"1 2 3\""
        );
        assert_eq!(
            read("3 1\n1 b\n").unwrap_err().to_string(),
            "invalid graph edge: \"1 b\""
        );
    }

    #[test]
    fn edge_labels_must_exist() {
        assert_eq!(
            read("3 1\n1 5\n").unwrap_err().to_string(),
            "invalid graph node: \"1 5\""
        );
        assert!(matches!(
            read("3 1\n0 1\n").unwrap_err(),
            ParseError::InvalidNode(_)
        ));
        assert!(matches!(
            read("3 1\n-1 2\n").unwrap_err(),
            ParseError::InvalidNode(_)
        ));
    }

    #[test]
    fn declared_edge_count_is_not_enforced() {
        let g = read("2 5\n1 2\n").unwrap();
        assert_eq!(g.edge_count(), 1);
    }
}
