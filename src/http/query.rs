//! Query string parsing module
//!
//! Decodes `application/x-www-form-urlencoded` query strings for request logging.

/// Parsed query parameter with every value seen for its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: String,
    pub values: Vec<String>,
}

/// Parse a query string (without leading `?`)
///
/// - `+` decodes to a space, `%XX` to the byte it encodes
/// - repeated names are grouped, keeping first-seen order
/// - pairs with an empty value (`a=` or bare `a`) are dropped
///
/// # Examples
/// ```ignore
/// let params = parse_query("q=fake+news&lang=en&lang=hi");
/// assert_eq!(params[1].values, vec!["en", "hi"]);
/// ```
pub fn parse_query(query: &str) -> Vec<QueryParam> {
    let mut params: Vec<QueryParam> = Vec::new();

    for pair in query.split('&') {
        let Some((raw_name, raw_value)) = pair.split_once('=') else {
            continue;
        };
        if raw_value.is_empty() {
            continue;
        }

        let name = decode_component(raw_name);
        let value = decode_component(raw_value);

        match params.iter_mut().find(|p| p.name == name) {
            Some(param) => param.values.push(value),
            None => params.push(QueryParam {
                name,
                values: vec![value],
            }),
        }
    }

    params
}

/// Decode one name or value: `+` becomes a space, then percent escapes
/// are resolved; invalid escapes are kept verbatim
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
