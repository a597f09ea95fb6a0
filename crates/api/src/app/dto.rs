use serde::Deserialize;

/// Query parameters for the customer lookup view.
///
/// The id arrives as raw text; canonicalization into a typed key happens in
/// the handler so a numeric id and its text form resolve identically.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub customer_id: Option<String>,
}
