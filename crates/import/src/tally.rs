use roxmltree::{Document, Node};
use thiserror::Error;

use vouchex_core::{TransactionRecord, TransactionType, NA, RECEIPT};

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Failed to parse Tally XML: {0}")]
    Parse(#[from] roxmltree::Error),
}

/// Extracts every receipt voucher from a Tally day-book export.
///
/// `VOUCHER` elements are matched anywhere in the tree, in document order.
/// Vouchers whose `VOUCHERTYPENAME` child is missing or not exactly
/// `"Receipt"` are skipped; a document that fails to parse is a hard error
/// with no partial result.
pub fn extract(data: &[u8]) -> Result<Vec<TransactionRecord>, TallyError> {
    let content = String::from_utf8_lossy(data);
    let document = Document::parse(&content)?;

    let mut records = Vec::new();
    for voucher in document
        .descendants()
        .filter(|node| node.has_tag_name("VOUCHER"))
    {
        if child_text(voucher, "VOUCHERTYPENAME") != Some(RECEIPT) {
            continue;
        }
        records.push(read_voucher(voucher));
    }

    Ok(records)
}

fn read_voucher(voucher: Node) -> TransactionRecord {
    // The first AMOUNT anywhere in the subtree feeds both amount columns.
    // NA only when no AMOUNT element exists at all.
    let amount = match find_descendant(voucher, "AMOUNT") {
        Some(node) => node.text().unwrap_or_default().to_string(),
        None => NA.to_string(),
    };
    let amount_verified = if amount == NA { NA } else { "Yes" };

    TransactionRecord {
        date: child_text(voucher, "DATE").map(str::to_string),
        transaction_type: classify(voucher),
        voucher_number: child_text_or_na(voucher, "VOUCHERNUMBER"),
        reference: child_text_or_na(voucher, "REFERENCE"),
        reference_type: child_text_or_na(voucher, "REFERENCETYPE"),
        reference_date: child_text_or_na(voucher, "REFERENCEDATE"),
        debtor: child_text_or_na(voucher, "PARTYLEDGERNAME"),
        reference_amount: amount.clone(),
        particulars: child_text_or_na(voucher, "PARTYLEDGERNAME"),
        amount_verified: amount_verified.to_string(),
        amount,
    }
}

/// Parent markers win over child markers when a voucher carries both.
fn classify(voucher: Node) -> TransactionType {
    if find_descendant(voucher, "PARENTVOUCHER").is_some() {
        TransactionType::Parent
    } else if find_descendant(voucher, "CHILDVOUCHER").is_some() {
        TransactionType::Child
    } else {
        TransactionType::Other
    }
}

fn find_descendant<'a, 'i>(node: Node<'a, 'i>, tag: &str) -> Option<Node<'a, 'i>> {
    node.descendants()
        .skip(1)
        .find(|n| n.has_tag_name(tag))
}

fn child_text<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
}

fn child_text_or_na(node: Node, tag: &str) -> String {
    match child_text(node, tag) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NA.to_string(),
    }
}
