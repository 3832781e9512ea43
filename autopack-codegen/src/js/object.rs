/// Object literal using property shorthand, one key per line after the
/// first: `{A,\nB}`. An empty list renders as `{}`.
pub fn shorthand_object<S: AsRef<str>>(names: &[S]) -> String {
    let body = names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{{{body}}}")
}
