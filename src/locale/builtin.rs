//! Locale contributions shipped with the viewer.

use super::catalog::LocaleTable;

/// Locale identifier of the built-in Italian contribution.
pub const ITALIAN: &str = "it";

/// Italian labels for the search and result-action surfaces.
///
/// Values are kept exactly as shipped, including the untranslated
/// stragglers (`onSelection`, `none`, ...).
#[must_use]
pub fn italian_table() -> LocaleTable {
    let pairs = [
        ("createDateYear", "anni"),
        ("createDateYears", "aAnno"),
        ("denominator", "risoluzione spaziale"),
        ("denominators", "Risoluzione spaziale"),
        ("orgName", "organizzazione"),
        ("orgNames", "Organizzazioni"),
        ("serviceTypes", "Tipi di servizio"),
        ("facetMore", "+ Mostra di più"),
        ("facetLess", "- Mostra meno"),
        ("view", "Visualizza"),
        ("zoomTo", "Zoom a"),
        ("saveXml", "Salva come XML"),
        ("saveXmlIso19139", "Salva come ISO19139 XML"),
        ("saveGM03", "Salva come GM03"),
        ("saveRdf", "Salva come RDF"),
        ("exportCsv", "Esporta (CSV)"),
        ("exportZip", "Esporta (ZIP)"),
        ("printSel", "Esporta (PDF)"),
        ("getMEF", "Export (ZIP)"),
        ("hitsPerPage", "Numero per pagina"),
        ("sortBy", "Ordina per"),
        ("otherActions", "Altre azioni"),
        ("onSelection", "On selection"),
        ("none", "none"),
        ("all", "all"),
        ("allInPage", "all in page"),
        ("select", "Select "),
        ("resultBy", " result(s) / "),
    ];

    pairs.into_iter().map(|(key, value)| (key.to_string(), value.to_string())).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn test_italian_table_has_unique_keys() {
        let table = italian_table();

        // 28 distinct pairs survive collection into the map
        expect_that!(table.len(), eq(28));
    }

    #[googletest::test]
    fn test_italian_table_spot_checks() {
        let table = italian_table();

        expect_that!(table.get("createDateYear").map(String::as_str), some(eq("anni")));
        expect_that!(table.get("exportCsv").map(String::as_str), some(eq("Esporta (CSV)")));
        expect_that!(table.get("facetMore").map(String::as_str), some(eq("+ Mostra di più")));
    }
}
