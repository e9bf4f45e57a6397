use super::{Context, Stage};
use crate::buffer::{LineBuffer, splice};
use crate::error::{Abort, StageName};
use crate::model::ViewKind;
use crate::names;
use crate::parser::{self, tokenizer};
use crate::policy::EmissionPolicy;
use tracing::trace;

/// Makes the class, or the protocol its view implements, declare
/// `AccessibilityIdentifiable`.
pub struct ConformanceInjector;

impl Stage for ConformanceInjector {
    fn name(&self) -> StageName {
        StageName::Conformance
    }

    fn apply(
        &self,
        buffer: &mut LineBuffer,
        ctx: &mut Context,
        policy: &EmissionPolicy,
    ) -> Result<(), Abort> {
        if buffer.is_empty() {
            return Err(Abort::EmptyBuffer);
        }
        let mut lines = buffer.lines().to_vec();
        let mut decl = parser::find_class_declaration(&lines).ok_or(Abort::NoClassDeclaration)?;

        if let Some(module) = policy.framework_import {
            let import = tokenizer::import_line(module);
            let present = lines.iter().any(|line| line.contains(import.trim_end()));
            // Imports below the class belong to appended page objects.
            let header = &lines[..decl.line_index];
            if let (false, Some(index)) = (present, parser::find_first_import(header)) {
                splice(&mut lines, index, vec![import]);
                decl.line_index += 1;
            }
        }

        ctx.view_kind = ViewKind::classify(&decl.name);
        ctx.class_name = decl.name;

        let interface = names::interface_name(&ctx.class_name);
        let target = parser::find_protocol(&lines, &interface).unwrap_or(decl.line_index);
        if !lines[target].contains(tokenizer::CAPABILITY) {
            lines[target] = add_capability(&lines[target]);
            trace!(line = target, "added capability");
        }

        buffer.replace(lines);
        Ok(())
    }
}

/// Insert the capability into a declaration's conformance list.
///
/// A generic `AnyObject` constraint is replaced. A bare `protocol Name {`
/// gains the colon it needs.
pub fn add_capability(line: &str) -> String {
    let mut words: Vec<String> = tokenizer::words(line).into_iter().map(str::to_string).collect();
    if words.len() < 2 {
        return line.to_string();
    }

    let has_conformances = words.len() > 3;
    let mut needs_comma = false;
    if has_conformances && words.iter().any(|w| w == tokenizer::ANY_OBJECT) {
        words.retain(|w| w != tokenizer::ANY_OBJECT);
    } else if has_conformances && words.iter().any(|w| w == tokenizer::ANY_OBJECT_LISTED) {
        words.retain(|w| w != tokenizer::ANY_OBJECT_LISTED);
        needs_comma = true;
    } else if !has_conformances {
        words[1].push(':');
    } else {
        let index = words.len() - 2;
        words[index].push(',');
    }
    if needs_comma {
        let index = words.len() - 2;
        words[index].push(',');
    }

    let index = words.len() - 1;
    words.insert(index, tokenizer::CAPABILITY.to_string());
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{DEV, QA};

    fn run(source: &str, policy: &EmissionPolicy) -> (Result<(), Abort>, String, Context) {
        let mut buffer = LineBuffer::from_text(source);
        let mut ctx = Context::new();
        let result = ConformanceInjector.apply(&mut buffer, &mut ctx, policy);
        (result, buffer.to_text(), ctx)
    }

    #[test]
    fn test_appends_to_existing_conformances() {
        assert_eq!(
            add_capability("final class LoginViewController: UIViewController {\n"),
            "final class LoginViewController: UIViewController, AccessibilityIdentifiable {\n"
        );
    }

    #[test]
    fn test_replaces_any_object() {
        assert_eq!(
            add_capability("protocol LoginView: AnyObject {\n"),
            "protocol LoginView: AccessibilityIdentifiable {\n"
        );
        assert_eq!(
            add_capability("protocol LoginView: AnyObject, Presentable {\n"),
            "protocol LoginView: Presentable, AccessibilityIdentifiable {\n"
        );
    }

    #[test]
    fn test_bare_protocol_gains_colon() {
        assert_eq!(
            add_capability("protocol LoginView {\n"),
            "protocol LoginView: AccessibilityIdentifiable {\n"
        );
    }

    #[test]
    fn test_prefers_matching_protocol() {
        let source = "import UIKit\n\
                      protocol LoginView: AnyObject {\n\
                      }\n\
                      final class LoginViewController: UIViewController, LoginView {\n\
                      }\n";
        let (result, text, ctx) = run(source, &QA);
        assert_eq!(result, Ok(()));
        assert_eq!(ctx.class_name, "LoginViewController");
        assert_eq!(ctx.view_kind, ViewKind::ViewController);
        assert!(text.contains("protocol LoginView: AccessibilityIdentifiable {\n"));
        assert!(text.contains("final class LoginViewController: UIViewController, LoginView {\n"));
    }

    #[test]
    fn test_inserts_framework_import_once() {
        let source = "import UIKit\nclass ProfileView: UIView {\n}\n";
        let (_, text, _) = run(source, &DEV);
        assert!(text.starts_with("import AccessibilityKit\nimport UIKit\n"));

        let (_, again, _) = run(&text, &DEV);
        assert_eq!(again, text);
    }

    #[test]
    fn test_framework_import_needs_header_import() {
        let source = "final class ProfileCell: UITableViewCell {\n\
                      }\n\
                      \n\
                      import XCTest\n";
        let (result, text, _) = run(source, &DEV);
        assert_eq!(result, Ok(()));
        assert!(!text.contains("AccessibilityKit"));
        assert!(text.starts_with("final class ProfileCell: UITableViewCell, AccessibilityIdentifiable {\n"));
    }

    #[test]
    fn test_framework_import_keeps_crlf() {
        let source = "import UIKit\r\nclass ProfileView: UIView {\r\n}\r\n";
        let (_, text, _) = run(source, &DEV);
        assert_eq!(
            text,
            "import AccessibilityKit\r\nimport UIKit\r\nclass ProfileView: UIView, AccessibilityIdentifiable {\r\n}\r\n"
        );
    }

    #[test]
    fn test_no_class_leaves_buffer_untouched() {
        let source = "import UIKit\nstruct Model {}\n";
        let (result, text, _) = run(source, &DEV);
        assert_eq!(result, Err(Abort::NoClassDeclaration));
        assert_eq!(text, source);
    }

    #[test]
    fn test_already_conforming_is_noop() {
        let source = "class ProfileView: UIView, AccessibilityIdentifiable {\n}\n";
        let (result, text, _) = run(source, &QA);
        assert_eq!(result, Ok(()));
        assert_eq!(text, source);
    }
}
