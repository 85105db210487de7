/// Derivation of the display collections from a status document.
///
/// The deriver is a pure function: the same document always produces the
/// same view, nothing is cached, and nothing fails — shape problems were
/// already rejected when the document was parsed.

use crate::model::{DerivedView, Installation, InstallationKind, StatusDocument, CABLE_CAR_ID};

/// Derive the three display collections from a fetched document.
///
/// Installations are walked in the order the API sent them and split into
/// trails (`path`) and facilities (everything else) in a single stable
/// pass, so both listings keep the source's relative order. The facility
/// listing then gets the cable car pinned to the front. Forecast pairs are
/// emitted in map order — date-like keys are deliberately not re-sorted.
pub fn derive(doc: &StatusDocument) -> DerivedView {
    let (trails, facilities): (Vec<Installation>, Vec<Installation>) = doc
        .installations
        .values()
        .cloned()
        .partition(|installation| installation.kind == InstallationKind::Path);

    DerivedView {
        trails,
        facilities: pin_cable_car(facilities),
        forecast: doc
            .forecast
            .iter()
            .map(|(date, entry)| (date.clone(), entry.clone()))
            .collect(),
    }
}

/// Move the cable car entry to the front of the facility list.
///
/// Only the first entry carrying the cable car id moves; any later
/// duplicates keep their positions. A list with no cable car comes back
/// unchanged — no placeholder is inserted.
pub fn pin_cable_car(mut facilities: Vec<Installation>) -> Vec<Installation> {
    if let Some(position) = facilities.iter().position(|f| f.id == CABLE_CAR_ID) {
        let cable_car = facilities.remove(position);
        facilities.insert(0, cable_car);
    }
    facilities
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
