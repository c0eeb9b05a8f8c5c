//! Plain-text rendering of networks in the classic terminal layout.
//!
//! ```text
//! -------------------------------------------------------------
//!
//! Final graph:
//!  Nodes :
//!   - s
//!   - t
//!  Arcs :
//!   - (s,t), c=7, f=7
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use ft_graph::Network;
use ft_results::LabeledSnapshot;
use ft_solver::{Augmentation, TraceSink};

const RULE: &str = "-------------------------------------------------------------";

/// Write one network block.
pub fn write_block<W, N, A>(
    out: &mut W,
    title: &str,
    nodes: impl IntoIterator<Item = N>,
    arcs: impl IntoIterator<Item = (A, A, f64, f64)>,
) -> io::Result<()>
where
    W: Write,
    N: Display,
    A: Display,
{
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "{}:", title)?;
    writeln!(out, " Nodes :")?;
    for node in nodes {
        writeln!(out, "  - {}", node)?;
    }
    writeln!(out, " Arcs :")?;
    for (from, to, capacity, flow) in arcs {
        writeln!(out, "  - ({},{}), c={}, f={}", from, to, capacity, flow)?;
    }
    Ok(())
}

/// Write a labeled snapshot.
pub fn write_labeled<W: Write>(
    out: &mut W,
    title: &str,
    nodes: &[String],
    snapshot: &LabeledSnapshot,
) -> io::Result<()> {
    write_block(
        out,
        title,
        nodes,
        snapshot
            .arcs
            .iter()
            .map(|a| (a.from.as_str(), a.to.as_str(), a.capacity, a.flow)),
    )
}

fn write_network<W: Write>(out: &mut W, title: &str, network: &Network) -> io::Result<()> {
    write_block(
        out,
        title,
        0..network.node_count(),
        network
            .arcs()
            .iter()
            .map(|a| (a.source.idx(), a.target.idx(), a.capacity, a.flow())),
    )
}

/// Trace sink that prints every checkpoint as it happens, by node index.
pub struct TerminalPrinter<W: Write> {
    out: W,
    steps: usize,
    error: Option<io::Error>,
}

impl<W: Write> TerminalPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            steps: 0,
            error: None,
        }
    }

    /// Print the network before solving.
    pub fn initial(&mut self, network: &Network) {
        let result = write_network(&mut self.out, "Initial graph", network);
        self.keep_first_error(result);
    }

    /// Flush and report the first write error, if any.
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()
    }

    fn keep_first_error(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl<W: Write> TraceSink for TerminalPrinter<W> {
    fn record(&mut self, network: &Network, augmentation: &Augmentation) {
        self.steps += 1;
        let title = format!(
            "Step {} (path of {} arcs, +{})",
            self.steps,
            augmentation.path.len(),
            augmentation.amount
        );
        let result = write_network(&mut self.out, &title, network);
        self.keep_first_error(result);
    }

    fn finalize(&mut self, network: &Network) {
        let result = write_network(&mut self.out, "Final graph", network);
        self.keep_first_error(result);
    }
}
