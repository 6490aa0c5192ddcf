//! Dominoes command implementation
//!
//! Implements `katas dominoes <TILE>...`.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::status;
use crate::cli::RunContext;
use crate::core::dominoes::{arrange_dominoes, can_dominoes_make_row, Domino};

/// JSON shape of the dominoes result
#[derive(Debug, Serialize)]
struct DominoReport {
    can_make_row: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<Vec<Domino>>,
}

/// Execute the dominoes command
pub fn execute(ctx: &RunContext, tiles: &[Domino], chain: bool) -> Result<()> {
    let report = if chain {
        let arrangement = arrange_dominoes(tiles);
        DominoReport {
            can_make_row: arrangement.is_some(),
            chain: arrangement,
        }
    } else {
        DominoReport {
            can_make_row: can_dominoes_make_row(tiles),
            chain: None,
        }
    };

    tracing::info!(
        "{} tiles, row possible: {}",
        tiles.len(),
        report.can_make_row
    );

    ctx.output.emit(&report, || render(&report))
}

fn render(report: &DominoReport) -> String {
    match (&report.chain, report.can_make_row) {
        (Some(chain), _) => {
            let tiles: Vec<String> = chain.iter().map(ToString::to_string).collect();
            format!("{} {}", status::SUCCESS, tiles.join(" "))
        }
        (None, true) => format!("{} yes", status::SUCCESS),
        (None, false) => format!("{} no", status::ERROR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_chain() {
        let report = DominoReport {
            can_make_row: true,
            chain: Some(vec![Domino(0, 1), Domino(1, 1)]),
        };
        assert_eq!(render(&report), "✓ [0|1] [1|1]");
    }

    #[test]
    fn test_render_answer() {
        let yes = DominoReport {
            can_make_row: true,
            chain: None,
        };
        let no = DominoReport {
            can_make_row: false,
            chain: None,
        };
        assert_eq!(render(&yes), "✓ yes");
        assert_eq!(render(&no), "✗ no");
    }
}
