//! Text scenario loader.
//!
//! # Format
//!
//! Whitespace-separated integers, one record per line.  Blank lines are
//! ignored.
//!
//! ```text
//! x3                 optional: playback ratio
//! simplified         optional: simplified playback flag
//! 2                  number of months
//! 3 2000             month 0: node count, budget delta
//! 0 10 10            node: category x y   (category 0 = arrival)
//! 1 1 2              arrival manifest: destination categories
//! 1 40 10            work node of category 1
//! 2 10 40            work node of category 2
//! 0 5000             month 1: no new nodes, 5000 budget
//! ```
//!
//! Node ids are not stored in the file: they are assigned in order of
//! appearance across the whole campaign, which matches the ids the network
//! hands out when the nodes are placed.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tc_core::Category;
use tc_network::NodeSpec;

use crate::{MonthPlan, Scenario, ScenarioError, ScenarioResult};

/// Load a scenario from a file.
pub fn load_scenario(path: &Path) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(mut reader: R) -> ScenarioResult<Scenario> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_scenario_str(&text)
}

/// Parse a scenario from its textual form.
pub fn load_scenario_str(text: &str) -> ScenarioResult<Scenario> {
    let mut lines = Lines::new(text);
    let mut scenario = Scenario::default();

    // ── Optional headers ──────────────────────────────────────────────────
    if let Some(ratio) = lines.peek().and_then(|l| l.strip_prefix('x')) {
        let ratio = ratio.trim();
        scenario.playback_ratio = Some(parse_token(ratio, lines.line_no() + 1)?);
        lines.next("playback ratio")?;
    }
    if lines.peek().is_some_and(|l| l.starts_with("simplified")) {
        scenario.simplified = true;
        lines.next("simplified flag")?;
    }

    // ── Months ────────────────────────────────────────────────────────────
    let (line_no, header) = lines.next("month count")?;
    let month_count: usize = parse_token(header.trim(), line_no)?;
    scenario.months.reserve(month_count);

    for _ in 0..month_count {
        let (line_no, header) = lines.next("month header")?;
        let [node_count, budget_delta] = parse_fixed::<i64, 2>(header, line_no)?;
        let node_count = usize::try_from(node_count).map_err(|_| ScenarioError::Parse {
            line:    line_no,
            message: format!("negative node count {node_count}"),
        })?;

        let mut month = MonthPlan { budget_delta, nodes: Vec::with_capacity(node_count) };
        for _ in 0..node_count {
            let (line_no, record) = lines.next("node record")?;
            let [category, x, y] = parse_fixed::<i32, 3>(record, line_no)?;
            let category = parse_category(category, line_no)?;

            if category.is_arrival() {
                let (line_no, manifest) = lines.next("arrival manifest")?;
                let manifest = manifest
                    .split_whitespace()
                    .map(|t| parse_token::<i32>(t, line_no).and_then(|c| parse_category(c, line_no)))
                    .collect::<ScenarioResult<Vec<_>>>()?;
                month.nodes.push(NodeSpec::arrival(x, y, manifest));
            } else {
                month.nodes.push(NodeSpec::work(category, x, y));
            }
        }
        scenario.months.push(month);
    }

    Ok(scenario)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Cursor over the non-blank lines of the input, tracking 1-based line numbers.
struct Lines<'a> {
    inner:   std::iter::Peekable<std::iter::Enumerate<std::str::Lines<'a>>>,
    current: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self { inner: text.lines().enumerate().peekable(), current: 0 }
    }

    fn skip_blank(&mut self) {
        while self.inner.peek().is_some_and(|(_, l)| l.trim().is_empty()) {
            self.inner.next();
        }
    }

    fn peek(&mut self) -> Option<&'a str> {
        self.skip_blank();
        self.inner.peek().map(|&(_, l)| l.trim())
    }

    fn line_no(&mut self) -> usize {
        self.skip_blank();
        self.inner.peek().map_or(self.current, |&(i, _)| i)
    }

    fn next(&mut self, expected: &'static str) -> ScenarioResult<(usize, &'a str)> {
        self.skip_blank();
        match self.inner.next() {
            Some((i, l)) => {
                self.current = i + 1;
                Ok((i + 1, l.trim()))
            }
            None => Err(ScenarioError::UnexpectedEnd { line: self.current + 1, expected }),
        }
    }
}

fn parse_token<T: FromStr>(token: &str, line: usize) -> ScenarioResult<T> {
    token.parse::<T>().map_err(|_| ScenarioError::Parse {
        line,
        message: format!("invalid integer {token:?}"),
    })
}

fn parse_fixed<T: FromStr + Copy + Default, const N: usize>(
    record: &str,
    line:   usize,
) -> ScenarioResult<[T; N]> {
    let tokens: Vec<&str> = record.split_whitespace().collect();
    if tokens.len() != N {
        return Err(ScenarioError::Parse {
            line,
            message: format!("expected {N} values, found {}", tokens.len()),
        });
    }
    let mut out = [T::default(); N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = parse_token(token, line)?;
    }
    Ok(out)
}

fn parse_category(raw: i32, line: usize) -> ScenarioResult<Category> {
    u16::try_from(raw).map(Category).map_err(|_| ScenarioError::Parse {
        line,
        message: format!("category {raw} out of range"),
    })
}
