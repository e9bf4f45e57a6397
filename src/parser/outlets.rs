use super::tokenizer::{self, LineKind};
use crate::elements;
use crate::model::Outlet;

/// Extract outlets in source order. Layout constraints are skipped;
/// duplicates are kept.
pub fn extract_outlets(lines: &[String]) -> Vec<Outlet> {
    lines
        .iter()
        .filter(|line| tokenizer::classify(line) == LineKind::Outlet)
        .filter_map(|line| parse_outlet(line))
        .collect()
}

/// Read `(name, type)` off one outlet declaration line.
///
/// The name is the word ending in `:`; the type is the last word minus the
/// trailing `!`/`?`. Trailing whitespace is ignored.
pub fn parse_outlet(line: &str) -> Option<Outlet> {
    let words = tokenizer::words(line.trim_end());
    let name = words.iter().find_map(|word| word.strip_suffix(':'))?;
    if name.is_empty() {
        return None;
    }
    let type_name = declared_type(words.last()?)?;
    if elements::is_layout_constraint(type_name) {
        return None;
    }
    Some(Outlet::new(name, type_name))
}

fn declared_type(word: &str) -> Option<&str> {
    let (last, _) = word.char_indices().last()?;
    let type_name = &word[..last];
    (!type_name.is_empty()).then_some(type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &str) -> Vec<String> {
        source.split_inclusive('\n').map(str::to_string).collect()
    }

    #[test]
    fn test_extracts_in_source_order() {
        let outlets = extract_outlets(&lines(
            "class A: UIView {\n\
             \t@IBOutlet weak var submit: UIButton!\n\
             \t@IBOutlet private weak var email: UITextField?\n\
             }\n",
        ));
        assert_eq!(
            outlets,
            vec![Outlet::new("submit", "UIButton"), Outlet::new("email", "UITextField")]
        );
    }

    #[test]
    fn test_skips_layout_constraints() {
        let outlets = extract_outlets(&lines(
            "\t@IBOutlet weak var heightConstraint: NSLayoutConstraint!\n\
             \t@IBOutlet weak var title: UILabel!\n",
        ));
        assert_eq!(outlets, vec![Outlet::new("title", "UILabel")]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let outlets = extract_outlets(&lines(
            "\t@IBOutlet weak var title: UILabel!\n\t@IBOutlet weak var title: UILabel!\n",
        ));
        assert_eq!(outlets.len(), 2);
    }

    #[test]
    fn test_unterminated_last_line() {
        assert_eq!(
            parse_outlet("@IBOutlet weak var title: UILabel!"),
            Some(Outlet::new("title", "UILabel"))
        );
        assert_eq!(
            parse_outlet("@IBOutlet weak var title: UILabel!\r\n"),
            Some(Outlet::new("title", "UILabel"))
        );
    }

    #[test]
    fn test_trailing_whitespace_keeps_outlet() {
        assert_eq!(
            parse_outlet("\t@IBOutlet weak var title: UILabel! \n"),
            Some(Outlet::new("title", "UILabel"))
        );
        let outlets = extract_outlets(&lines(
            "\t@IBOutlet weak var title: UILabel!\t\r\n\
             \t@IBOutlet weak var done: UIButton!\n",
        ));
        assert_eq!(outlets, vec![Outlet::new("title", "UILabel"), Outlet::new("done", "UIButton")]);
    }

    #[test]
    fn test_line_without_name_is_ignored() {
        assert_eq!(parse_outlet("@IBOutlet weak var title:UILabel!\n"), None);
        assert!(extract_outlets(&lines("class A: UIView {\n}\n")).is_empty());
    }
}
