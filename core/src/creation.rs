#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShoulderFixture {
    pub shoulder: &'static str,
    pub file_name: &'static str,
}

/// One creation request per entry, attempted in this order.
pub const SHOULDER_FIXTURES: [ShoulderFixture; 8] = [
    ShoulderFixture {
        shoulder: "doi:10.15697/",
        file_name: "crossref_doi_10.15697_posted_content.txt",
    },
    ShoulderFixture {
        shoulder: "doi:10.15697/",
        file_name: "crossref_doi_10.15697_journal.txt",
    },
    ShoulderFixture {
        shoulder: "ark:/99999/fk4",
        file_name: "datacite_ark_99999_fk4.txt",
    },
    ShoulderFixture {
        shoulder: "doi:10.5072/FK2",
        file_name: "datacite_xml_doi_10.5072_FK2.txt",
    },
    ShoulderFixture {
        shoulder: "doi:10.5072/FK2",
        file_name: "datacite_doi_10.5072_FK2.txt",
    },
    ShoulderFixture {
        shoulder: "ark:/99999/fk4",
        file_name: "dc_ark_99999_fk4.txt",
    },
    ShoulderFixture {
        shoulder: "doi:10.5072/FK2",
        file_name: "dc_doi_10.5072_FK2.txt",
    },
    ShoulderFixture {
        shoulder: "ark:/99999/fk4",
        file_name: "erc_ark_99999_fk4.txt",
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreationResult {
    pub shoulder: String,
    pub identifier: Option<String>,
    pub response_text: String,
}

/// Extracts the minted identifier from a mint response.
///
/// `success: doi:10.15697/FK27S78 | ark:/c5697/fk27s78` yields the DOI; the
/// shadow ARK after `|` is ignored. Anything not starting with `success`
/// (for example `error: bad request - no such shoulder created`) yields `None`.
pub fn parse_created_identifier(text: &str) -> Option<String> {
    if !text.trim().starts_with("success") {
        return None;
    }
    let (_, ids) = text.split_once(':')?;
    let first = ids.split('|').next()?.trim();
    if first.is_empty() {
        return None;
    }
    Some(first.to_string())
}
