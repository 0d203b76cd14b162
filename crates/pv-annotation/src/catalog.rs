//! Static accession catalog used to pick a protein.

use std::sync::LazyLock;

use tracing::debug;

use pv_model::{LookupEntry, search};

static CATALOG: LazyLock<Vec<LookupEntry>> = LazyLock::new(|| {
    vec![
        LookupEntry::new("P69905", "Hemoglobin subunit alpha"),
        LookupEntry::new("P68871", "Hemoglobin subunit beta"),
        LookupEntry::new("P68133", "Alpha-synuclein"),
        LookupEntry::new("P02649", "Apolipoprotein E"),
        LookupEntry::new("P12345", "Protein X"),
        LookupEntry::new("P67890", "Protein Y"),
        LookupEntry::new("P54321", "Protein Z"),
        LookupEntry::new("Q12345", "Protein A"),
        LookupEntry::new("P12346", "Protein B"),
        LookupEntry::new("P11111", "Myosin heavy chain"),
        LookupEntry::new("P12347", "ATP synthase subunit"),
        LookupEntry::new("Q9UBS5", "Collagen type II alpha 1 chain"),
        LookupEntry::new("O14786", "Insulin receptor"),
        LookupEntry::new("O00230", "Ribulose bisphosphate carboxylase"),
        LookupEntry::new("P30740", "GAPDH"),
        LookupEntry::new("Q9Y6A6", "Voltage-gated potassium channel"),
        LookupEntry::new("Q9TYJ7", "Glutamate receptor"),
        LookupEntry::new("P49760", "Serine/threonine-protein kinase"),
        LookupEntry::new("P0A5Z5", "Pyruvate kinase"),
        LookupEntry::new("P0A9W9", "E. coli ribosome protein"),
        LookupEntry::new("P42137", "Alpha-1-antitrypsin"),
        LookupEntry::new("Q9H714", "Serum amyloid A protein"),
        LookupEntry::new("P04637", "CDK2 protein"),
        LookupEntry::new("Q9NZK0", "P53 tumor suppressor protein"),
        LookupEntry::new("Q9UJX4", "Ras-related protein"),
        LookupEntry::new("O00427", "Tyrosine kinase"),
        LookupEntry::new("P13056", "Calmodulin"),
        LookupEntry::new("Q9GZZ3", "NADH dehydrogenase"),
        LookupEntry::new("P30153", "Acetylcholinesterase"),
        LookupEntry::new("P05155", "Cytochrome P450"),
        LookupEntry::new("P00558", "Tumor necrosis factor receptor"),
        LookupEntry::new("Q9CQ72", "Heat shock protein 90"),
        LookupEntry::new("P02774", "Beta-globin"),
        LookupEntry::new("P20702", "Bovine serum albumin"),
        LookupEntry::new("P62937", "Interleukin-2 receptor"),
        LookupEntry::new("P25963", "Erythropoietin receptor"),
        LookupEntry::new("Q8NDQ2", "Eukaryotic translation initiation factor"),
        LookupEntry::new("P60903", "Caspase-3"),
        LookupEntry::new("Q9UN76", "Kinesin light chain"),
        LookupEntry::new("Q9UHC6", "Protein kinase C"),
        LookupEntry::new("P62158", "Actin, cytoplasmic"),
        LookupEntry::new("Q99723", "Peptidylprolyl isomerase"),
        LookupEntry::new("P08567", "Rhodopsin"),
        LookupEntry::new("P49297", "Hemoglobin subunit delta"),
        LookupEntry::new("Q9BXS1", "BCL-2 associated X protein"),
        LookupEntry::new("Q9H9M5", "Transcription factor AP-2"),
        LookupEntry::new("P51451", "Ubiquitin-conjugating enzyme"),
        LookupEntry::new("P09160", "Pectinase"),
        LookupEntry::new("Q6NY98", "Epithelial cadherin"),
        LookupEntry::new("P04968", "Hsp70 protein"),
        LookupEntry::new("P02157", "Bovine lactoferrin"),
        LookupEntry::new("Q2M9R7", "Dystrophin"),
        LookupEntry::new("O43389", "Rho GTPase"),
        LookupEntry::new("Q14765", "Purinergic receptor"),
        LookupEntry::new("Q9Y263", "Alkaline phosphatase"),
        LookupEntry::new("Q9UV94", "Protein kinase AMP-activated"),
        LookupEntry::new("P00533", "G-protein coupled receptor"),
        LookupEntry::new("P12830", "Parathyroid hormone receptor"),
        LookupEntry::new("O14540", "Thyroid-stimulating hormone receptor"),
        LookupEntry::new("P01375", "Fibrinogen alpha chain"),
        LookupEntry::new("Q9UBV4", "Neurotrophin receptor"),
        LookupEntry::new("P63104", "Focal adhesion kinase"),
        LookupEntry::new("O60736", "Retinol-binding protein"),
        LookupEntry::new("Q01955", "Cadherin-like protein"),
        LookupEntry::new("Q7L5Y2", "Integrin alpha 5"),
        LookupEntry::new("P11532", "Actin-binding protein"),
        LookupEntry::new("P02785", "Fas receptor"),
        LookupEntry::new("Q99548", "P53-binding protein"),
        LookupEntry::new("P03241", "Polymerase"),
        LookupEntry::new("P08474", "Phospholipase"),
        LookupEntry::new("P15531", "Toll-like receptor 4"),
        LookupEntry::new("P01308", "Human serum albumin"),
    ]
});

/// Message shown when a search term matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try a different search term.";

/// Every catalog entry, in listing order.
pub fn catalog() -> &'static [LookupEntry] {
    &CATALOG
}

/// Catalog entries whose id or name contains `term`, ignoring case.
pub fn search_catalog(term: &str) -> Vec<&'static LookupEntry> {
    let matches = search(catalog(), term);
    debug!(term, matches = matches.len(), "searched accession catalog");
    matches
}

/// Outcome of picking an accession from a filtered catalog view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSelection {
    Selected(&'static LookupEntry),
    /// The search matched nothing.
    NoResults,
    /// The requested accession is not part of the filtered view.
    NotListed(String),
}

/// Pick `requested` from the entries matching `term`, or the first match.
pub fn select_accession(term: &str, requested: Option<&str>) -> CatalogSelection {
    let view = search_catalog(term);
    if view.is_empty() {
        return CatalogSelection::NoResults;
    }
    match requested {
        Some(id) => view
            .iter()
            .find(|entry| entry.id.eq_ignore_ascii_case(id.trim()))
            .copied()
            .map_or_else(
                || CatalogSelection::NotListed(id.trim().to_string()),
                CatalogSelection::Selected,
            ),
        None => CatalogSelection::Selected(view[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_loaded_once_in_order() {
        assert_eq!(catalog().len(), 72);
        assert_eq!(catalog()[0].id, "P69905");
        assert!(std::ptr::eq(catalog(), catalog()));
    }

    #[test]
    fn hemoglobin_search() {
        let ids: Vec<_> = search_catalog("hemoglobin").iter().map(|e| e.id).collect();
        assert!(ids.contains(&"P69905"));
        assert!(ids.contains(&"P68871"));
    }

    #[test]
    fn select_defaults_to_first_match() {
        match select_accession("kinase", None) {
            CatalogSelection::Selected(entry) => assert_eq!(entry.id, "P49760"),
            other => panic!("unexpected selection: {other:?}"),
        }
    }

    #[test]
    fn select_requested_must_be_listed() {
        assert_eq!(
            select_accession("hemoglobin", Some("P02649")),
            CatalogSelection::NotListed("P02649".to_string())
        );
        assert!(matches!(
            select_accession("hemoglobin", Some("p68871")),
            CatalogSelection::Selected(entry) if entry.id == "P68871"
        ));
    }

    #[test]
    fn no_results_is_a_state() {
        assert_eq!(select_accession("zzzz", None), CatalogSelection::NoResults);
    }
}
