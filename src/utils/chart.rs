//! Horizontal text bar charts for the terminal.

use crate::utils::formatting::{bold, pad_right, visible_width};
use ansi_term::Colour;

const FULL: &str = "█";
const STACK: &str = "▒";

struct Bar {
    label: String,
    value: f64,
    stacked: f64,
    note: Option<String>,
}

pub struct BarChart {
    title: String,
    width: usize,
    bars: Vec<Bar>,
}

impl BarChart {
    /// `width` is the number of cells used by the longest bar.
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width: width.max(1),
            bars: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: f64) {
        self.bars.push(Bar {
            label: label.into(),
            value,
            stacked: 0.0,
            note: None,
        });
    }

    /// Bar made of `value` followed by a second `stacked` segment.
    pub fn add_stacked(
        &mut self,
        label: impl Into<String>,
        value: f64,
        stacked: f64,
        note: Option<String>,
    ) {
        self.bars.push(Bar {
            label: label.into(),
            value,
            stacked,
            note,
        });
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n", bold(&self.title));

        if self.bars.is_empty() {
            out.push_str("(no data)\n");
            return out;
        }

        let max = self
            .bars
            .iter()
            .map(|b| b.value.max(0.0) + b.stacked.max(0.0))
            .fold(0.0_f64, f64::max);
        let label_w = self
            .bars
            .iter()
            .map(|b| visible_width(&b.label))
            .max()
            .unwrap_or(0);

        for b in &self.bars {
            let main = self.cells(b.value, max);
            let extra = self.cells(b.stacked, max);

            let mut line = format!("{} │", pad_right(&b.label, label_w));
            line.push_str(&Colour::Blue.paint(FULL.repeat(main)).to_string());
            if extra > 0 {
                line.push_str(&Colour::Yellow.paint(STACK.repeat(extra)).to_string());
            }

            if b.stacked > 0.0 {
                line.push_str(&format!(" {:.2} + {:.2}", b.value, b.stacked));
            } else {
                line.push_str(&format!(" {}", trim_number(b.value)));
            }
            if let Some(note) = &b.note {
                line.push_str(&format!(" ({note})"));
            }

            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    fn cells(&self, v: f64, max: f64) -> usize {
        if max <= 0.0 || v <= 0.0 {
            return 0;
        }
        ((v / max) * self.width as f64).round() as usize
    }
}

/// Counts print without decimals, other values with two.
fn trim_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}
