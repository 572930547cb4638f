//! Shared helpers for integration tests

/// Strip formatting whitespace from a JSON fixture.
///
/// Whitespace inside string literals is kept, so fixtures can be indented
/// freely and still compare equal to compact encoder output.
pub fn trim(fixture: &str) -> String {
    let mut out = String::with_capacity(fixture.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in fixture.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if !c.is_whitespace() {
            out.push(c);
        }
    }
    out
}
