use crate::application::dto::QuotationView;
use crate::ports::outbound::ReportFormatter;
use crate::quotation::domain::{Offer, StepRecord};
use crate::shared::Result;

/// Placeholder glyph for a product the vendor did not quote.
const NO_OFFER: &str = "—";

/// Markdown table header for the pending-steps report
const STEPS_TABLE_HEADER: &str =
    "| Inquiry | Rev | Step | Order | Approver | Status | Buyer | Vendor | Prev Approval |\n";

/// Markdown table separator line for the pending-steps report
const STEPS_TABLE_SEPARATOR: &str =
    "|---------|-----|------|-------|----------|--------|-------|--------|---------------|\n";

/// MarkdownFormatter adapter for rendering reports as Markdown tables
///
/// This adapter implements the ReportFormatter port for Markdown format.
/// The comparison matrix renders one row per product with one column per
/// vendor; offer cells carry selection and lock markers so the table
/// alone shows what a dispatch would submit.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Renders one offer cell: price and currency for a quoted slot, the
    /// no-offer glyph for a gap-filled placeholder.
    fn render_offer(offer: &Offer) -> String {
        if offer.is_placeholder() {
            NO_OFFER.to_string()
        } else {
            format!(
                "{:.2} {} (net {:.2} TRY)",
                offer.unit_price, offer.currency, offer.total_net_try
            )
        }
    }

    /// Marker prefix for an offer cell: the final status when the line is
    /// locked, the checkbox state otherwise.
    fn cell_marker(view: &QuotationView, line_no: u32, vendor_no: &str) -> &'static str {
        let locked = view
            .lines
            .iter()
            .find(|l| l.line_no == line_no && l.vendor_no == vendor_no)
            .and_then(|l| l.approval_status);
        match locked {
            Some(status) => {
                if status.code() == "APP" {
                    "[APP] "
                } else {
                    "[REJ] "
                }
            }
            None => {
                if view.is_selected(line_no, vendor_no) {
                    "[x] "
                } else {
                    ""
                }
            }
        }
    }

    fn render_matrix_table(&self, output: &mut String, view: &QuotationView) {
        output.push_str("| Line | Part No | Description | Qty |");
        for vendor in &view.matrix.vendors {
            output.push_str(&format!(
                " {} ({}) |",
                Self::escape_markdown_table_cell(&vendor.vendor_name),
                Self::escape_markdown_table_cell(&vendor.vendor_no)
            ));
        }
        output.push('\n');

        output.push_str("|------|---------|-------------|-----|");
        for _ in &view.matrix.vendors {
            output.push_str("---|");
        }
        output.push('\n');

        for product in &view.matrix.products {
            output.push_str(&format!(
                "| {} | {} | {} | {} {} |",
                product.line_no,
                Self::escape_markdown_table_cell(&product.part_no),
                Self::escape_markdown_table_cell(&product.description),
                product.qty,
                Self::escape_markdown_table_cell(&product.unit_of_measure)
            ));
            for vendor in &view.matrix.vendors {
                // Offers are slot-indexed by line_no, not by row position.
                let slot = (product.line_no - 1) as usize;
                let cell = vendor
                    .offers
                    .get(slot)
                    .map(Self::render_offer)
                    .unwrap_or_else(|| NO_OFFER.to_string());
                output.push_str(&format!(
                    " {}{} |",
                    Self::cell_marker(view, product.line_no, &vendor.vendor_no),
                    cell
                ));
            }
            output.push('\n');
        }

        output.push_str("| **Total (TRY)** | | | |");
        for vendor in &view.matrix.vendors {
            output.push_str(&format!(" **{:.2}** |", vendor.total));
        }
        output.push('\n');
    }

    fn render_selection_summary(&self, output: &mut String, view: &QuotationView) {
        output.push_str("\n## Selection\n\n");
        if view.selection.is_empty() {
            output.push_str("No offers selected.\n");
            return;
        }
        for (line_no, vendor_no) in view.selection.entries() {
            let locked = if view.is_locked(line_no, vendor_no) {
                " (already approved)"
            } else {
                ""
            };
            output.push_str(&format!(
                "- line {}: vendor {}{}\n",
                line_no, vendor_no, locked
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_matrix(&self, view: &QuotationView) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "# Quotation Comparison: Inquiry {} (Revision {})\n\n",
            view.inquiry_no, view.revision_no
        ));
        output.push_str(&format!(
            "{} line(s), {} product(s), {} vendor(s)\n\n",
            view.total_count,
            view.matrix.products.len(),
            view.matrix.vendors.len()
        ));

        if view.matrix.is_empty() {
            output.push_str("No quotation lines found for this revision.\n");
            return Ok(output);
        }

        self.render_matrix_table(&mut output, view);
        self.render_selection_summary(&mut output, view);
        Ok(output)
    }

    fn format_steps(&self, steps: &[StepRecord]) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Pending Approval Steps\n\n");

        if steps.is_empty() {
            output.push_str("No approval steps are waiting for you.\n");
            return Ok(output);
        }

        output.push_str(STEPS_TABLE_HEADER);
        output.push_str(STEPS_TABLE_SEPARATOR);
        for step in steps {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                step.inquiry_no,
                step.revision_no,
                step.step_no,
                step.approver_order(),
                Self::escape_markdown_table_cell(&step.approver_name),
                Self::escape_markdown_table_cell(&step.approval_status),
                Self::escape_markdown_table_cell(&step.buyer_name),
                Self::escape_markdown_table_cell(step.key_ref_vendor().unwrap_or("-")),
                step.prev_approval_display()
            ));
        }
        Ok(output)
    }
}
