use super::line::QuotationLine;
use serde::Serialize;
use std::collections::HashMap;

/// One distinct product line of the inquiry. The first line seen for a
/// `line_no` defines the descriptive fields; later lines for the same
/// product never overwrite them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub line_no: u32,
    pub part_no: String,
    pub description: String,
    pub qty: f64,
    pub unit_of_measure: String,
}

/// A single vendor's quoted price for one product slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub unit_price: f64,
    pub currency: String,
    pub total_net: f64,
    #[serde(rename = "totalNetTRY")]
    pub total_net_try: f64,
}

impl Offer {
    /// Gap-fill placeholder for a product the vendor did not quote.
    ///
    /// Keeps `currency: "TRY"` for wire compatibility with the original
    /// portal, even though the vendor may quote in another currency.
    /// Renderers should treat placeholders as "no offer" rather than a
    /// real zero-value TRY quote.
    pub fn placeholder() -> Self {
        Self {
            unit_price: 0.0,
            currency: "TRY".to_string(),
            total_net: 0.0,
            total_net_try: 0.0,
        }
    }

    /// True when this slot was gap-filled rather than quoted.
    pub fn is_placeholder(&self) -> bool {
        self.unit_price == 0.0
            && self.total_net == 0.0
            && self.total_net_try == 0.0
            && self.currency == "TRY"
    }

    fn from_line(line: &QuotationLine) -> Self {
        Self {
            unit_price: line.unit_price,
            currency: line.currency_code.clone(),
            total_net: line.net_amount,
            total_net_try: line.net_amount_try,
        }
    }
}

/// One vendor column of the comparison matrix.
///
/// After [`build_matrix`] completes, `offers` is dense: exactly one slot
/// per product, indexed by `line_no - 1`, with placeholders in the slots
/// the vendor did not quote. `total` is the sum of `gross_amount_try`
/// over the vendor's quoted lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub vendor_no: String,
    pub vendor_name: String,
    pub offers: Vec<Offer>,
    pub total: f64,
}

/// The product × vendor comparison matrix, ready for tabular rendering.
///
/// Products and vendors appear in order of first appearance in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    pub products: Vec<Product>,
    pub vendors: Vec<Vendor>,
}

impl ComparisonMatrix {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.vendors.is_empty()
    }
}

/// Builds the comparison matrix from a flat list of quotation lines.
///
/// Pure function of its input: a single pass upserts products (first
/// occurrence wins) and vendors (insertion order preserved), places each
/// line's offer at `line_no - 1` (last write wins on duplicate keys, which
/// the schema invariant rules out), and accumulates vendor totals. A
/// second pass gap-fills every vendor to `max(line_no)` slots so the
/// result is rectangular. Empty input yields an empty matrix.
///
/// Callers must validate lines first; a `line_no` of zero would underflow
/// the offer index.
pub fn build_matrix(lines: &[QuotationLine]) -> ComparisonMatrix {
    let mut products: Vec<Product> = Vec::new();
    let mut vendors: Vec<Vendor> = Vec::new();
    let mut product_index: HashMap<u32, usize> = HashMap::new();
    let mut vendor_index: HashMap<String, usize> = HashMap::new();
    let mut max_line_no: usize = 0;

    for line in lines {
        max_line_no = max_line_no.max(line.line_no as usize);

        product_index.entry(line.line_no).or_insert_with(|| {
            products.push(Product {
                line_no: line.line_no,
                part_no: line.part_no.clone(),
                description: line.description.clone(),
                qty: line.qty,
                unit_of_measure: line.unit_of_measure.clone(),
            });
            products.len() - 1
        });

        let vendor_pos = *vendor_index
            .entry(line.vendor_no.clone())
            .or_insert_with(|| {
                vendors.push(Vendor {
                    vendor_no: line.vendor_no.clone(),
                    vendor_name: line.vendor_name.clone(),
                    offers: Vec::new(),
                    total: 0.0,
                });
                vendors.len() - 1
            });

        let vendor = &mut vendors[vendor_pos];
        let slot = (line.line_no - 1) as usize;
        if vendor.offers.len() <= slot {
            vendor.offers.resize_with(slot + 1, Offer::placeholder);
        }
        vendor.offers[slot] = Offer::from_line(line);
        vendor.total += line.gross_amount_try;
    }

    for vendor in &mut vendors {
        if vendor.offers.len() < max_line_no {
            vendor.offers.resize_with(max_line_no, Offer::placeholder);
        }
    }

    ComparisonMatrix { products, vendors }
}
