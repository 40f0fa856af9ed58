use std::io::{BufRead, Write};

use log::debug;

pub mod condense;
pub mod error;
pub mod graph;
pub mod input;
pub mod report;
pub mod scc;

pub use error::ParseError;

/// Line reader over the problem input.
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Reads the next line with its terminator (`\n` or `\r\n`) removed.
    /// Returns `None` at end of input.
    pub fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        if input.ends_with('\n') {
            input.pop();
            if input.ends_with('\r') {
                input.pop();
            }
        }
        Ok(Some(input))
    }
}

/// Output writer that buffers everything in memory until the caller flushes it.
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        write!(self.0, "{}", value).expect("Failed write");
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        writeln!(self.0, "{}", value).expect("Failed write");
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub verbose: bool,
}

/// Reads a graph, splits it into strongly connected components and reports how
/// many nodes fall into each condensation bucket.
pub fn solve(input: &mut Scanner, out: &mut Writer, opts: Options) -> Result<(), ParseError> {
    let graph = input::read_graph(input)?;
    debug!("parsed graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    let result = if opts.verbose {
        report::write_adjacency(out, &graph);
        scc::find_components(&graph, &mut report::TraceVisitor::new(out, &graph))
    } else {
        scc::find_components(&graph, &mut scc::NoTrace)
    };
    debug!("found {} components", result.component_count());

    let condensation = condense::classify(&graph, &result);
    let totals = condensation.totals();
    debug!("bucket totals: a={} b={} c={}", totals.a, totals.b, totals.c);

    if opts.verbose {
        report::write_classification(out, &graph, &result, &condensation);
    } else {
        report::write_summary(out, &graph, &totals);
    }

    Ok(())
}

/// Test utilities for running and verifying test cases
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn data_dir(category: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join(category)
    }

    /// Discover all test case numbers for a given category
    pub fn discover_tests(category: &str) -> Vec<usize> {
        let mut test_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(data_dir(category)) {
            for entry in entries.flatten() {
                if let Some(num) = entry
                    .file_name()
                    .to_str()
                    .and_then(|name| name.strip_suffix(".in"))
                    .and_then(|num| num.parse::<usize>().ok())
                {
                    test_numbers.push(num);
                }
            }
        }

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single test case and return the (expected, actual) output
    pub fn run_test_case<F>(
        category: &str,
        test_num: usize,
        solve_fn: F,
    ) -> Result<(String, String), String>
    where
        F: FnOnce(&mut Scanner, &mut Writer),
    {
        let test_dir = data_dir(category);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();
        solve_fn(&mut scanner, &mut writer);

        let actual = writer
            .into_string()
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((expected.trim().to_string(), actual.trim().to_string()))
    }

    /// Verify all test cases for a category
    pub fn verify_all_tests<F>(category: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer),
    {
        let test_cases = discover_tests(category);
        assert!(!test_cases.is_empty(), "No test cases found for {}", category);

        for test_num in test_cases {
            match run_test_case(category, test_num, &solve_fn) {
                Ok((expected, actual)) => assert_eq!(
                    actual, expected,
                    "Test case {} failed\nExpected:\n{}\nActual:\n{}",
                    test_num, expected, actual
                ),
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }
    }
}
