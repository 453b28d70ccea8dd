//! Content hashing for proposals and templates
//!
//! Hashes are SHA-256 over a canonical JSON rendering (object keys sorted),
//! hex-encoded.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::model::{ItemInformation, PaymentInformation, ProposalKind};

fn digest(value: &serde_json::Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash identifying a proposal by its content
pub fn proposal_hash(
    submitter: &str,
    block_start: i64,
    block_end: i64,
    title: &str,
    description: &str,
    kind: ProposalKind,
    options: &[String],
) -> String {
    digest(&json!({
        "submitter": submitter,
        "block_start": block_start,
        "block_end": block_end,
        "title": title,
        "description": description,
        "kind": kind.as_str(),
        "options": options,
    }))
}

/// Hash of one voting option, bound to its proposal
pub fn proposal_option_hash(proposal_hash: &str, option_id: u32, description: &str) -> String {
    digest(&json!({
        "proposal_hash": proposal_hash,
        "option_id": option_id,
        "description": description,
    }))
}

/// Hash of a template's content
pub fn template_hash(
    profile_id: i64,
    item: &ItemInformation,
    payment: &PaymentInformation,
) -> String {
    let price = &payment.item_price;
    digest(&json!({
        "profile_id": profile_id,
        "item_information": {
            "title": item.title,
            "short_description": item.short_description,
            "long_description": item.long_description,
            "item_category_id": item.item_category_id,
        },
        "payment_information": {
            "payment_type": payment.payment_type.as_str(),
            "currency": price.currency.as_str(),
            "base_price": price.base_price.normalize().to_string(),
            "domestic": price.shipping_price.domestic.normalize().to_string(),
            "international": price.shipping_price.international.normalize().to_string(),
            "address": price.cryptocurrency_address.as_ref().map(|a| a.address.as_str()),
        },
    }))
}
