/// Joins class fragments, skipping empty ones and collapsing whitespace.
pub fn cn<'a, I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<Option<&'a str>>,
{
    parts
        .into_iter()
        .filter_map(Into::into)
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::cn;

    #[test]
    fn joins_and_skips_empty() {
        assert_eq!(cn(["a b", "", "c"]), "a b c");
        assert_eq!(cn([Some("py-12"), None, Some("  bg-primary \n")]), "py-12 bg-primary");
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert_eq!(cn(Vec::<&str>::new()), "");
        assert_eq!(cn([None::<&str>]), "");
    }
}
