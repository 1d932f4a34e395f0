use crate::vendor::{Vendor, VendorPatch};

/// Result of applying a [`VendorPatch`] to a stored vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    pub vendor: Vendor,
    /// `false` means `vendor` equals the input and must not be saved.
    pub changed: bool,
}

/// Overlay `proposed` onto `existing` field by field. Only values that are
/// present and differ from the stored one count as a change; the identity
/// key is always carried over from `existing`.
pub fn merge(existing: &Vendor, proposed: &VendorPatch) -> Merged {
    let mut vendor = existing.clone();
    let first = apply(&mut vendor.first_name, &proposed.first_name);
    let last = apply(&mut vendor.last_name, &proposed.last_name);
    Merged {
        vendor,
        changed: first || last,
    }
}

fn apply(current: &mut Option<String>, proposed: &Option<String>) -> bool {
    match proposed {
        Some(value) if current.as_ref() != Some(value) => {
            *current = Some(value.clone());
            true
        }
        _ => false,
    }
}
