//! Client-side password policy
//!
//! Every rule is checked on every call so the registration form can show the
//! complete list of problems while the user is still typing.

pub const TOO_SHORT: &str = "La contraseña debe tener al menos 8 caracteres.";
pub const MISSING_UPPERCASE: &str = "La contraseña debe tener al menos una mayúscula.";
pub const MISSING_LOWERCASE: &str = "La contraseña debe tener al menos una minúscula.";
pub const MISSING_SPECIAL: &str = "La contraseña debe tener al menos un carácter especial.";
pub const CONTAINS_FIRST_NAME: &str = "La contraseña no debe contener el nombre de la persona.";
pub const CONTAINS_LAST_NAME: &str = "La contraseña no debe contener el apellido de la persona.";

const MIN_PASSWORD_LEN: usize = 8;
const MIN_NAME_LEN: usize = 3;

/// Returns the violated rules for `password`, in rule order.
///
/// An empty list means the password is acceptable. The lowercase rule is only
/// checked once the password contains an uppercase letter.
pub fn evaluate(password: &str, first_name: &str, last_name: &str) -> Vec<String> {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let mut issues = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LEN {
        issues.push(TOO_SHORT.to_string());
    }
    if !has_upper {
        issues.push(MISSING_UPPERCASE.to_string());
    }
    if has_upper && !has_lower {
        issues.push(MISSING_LOWERCASE.to_string());
    }
    if !has_special {
        issues.push(MISSING_SPECIAL.to_string());
    }
    if contains_name(password, first_name) {
        issues.push(CONTAINS_FIRST_NAME.to_string());
    }
    if contains_name(password, last_name) {
        issues.push(CONTAINS_LAST_NAME.to_string());
    }

    issues
}

/// Case-insensitive substring check, ignoring names shorter than three characters.
fn contains_name(password: &str, name: &str) -> bool {
    let name = name.trim();
    name.chars().count() >= MIN_NAME_LEN
        && password.to_lowercase().contains(&name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliant_password_has_no_issues() {
        for pw in ["Abcdef!1", "Zz#zzzzz", "hola-MUNDO", "Pa ss word"] {
            assert!(evaluate(pw, "Ann", "Lee").is_empty(), "{pw}");
        }
    }

    #[test]
    fn short_password_is_reported_first() {
        let issues = evaluate("Ab!", "", "");
        assert_eq!(issues, vec![TOO_SHORT.to_string()]);
    }

    #[test]
    fn uppercase_without_lowercase_requires_lowercase() {
        let issues = evaluate("ABC!1234", "Ann", "Lee");
        assert!(issues.contains(&MISSING_LOWERCASE.to_string()));
        assert!(!issues.contains(&MISSING_UPPERCASE.to_string()));
    }

    #[test]
    fn lowercase_rule_is_skipped_without_uppercase() {
        let issues = evaluate("abc!1234", "Ann", "Lee");
        assert!(issues.contains(&MISSING_UPPERCASE.to_string()));
        assert!(!issues.contains(&MISSING_LOWERCASE.to_string()));

        let digits_only = evaluate("12345678", "", "");
        assert_eq!(
            digits_only,
            vec![MISSING_UPPERCASE.to_string(), MISSING_SPECIAL.to_string()]
        );
    }

    #[test]
    fn length_counts_characters() {
        // six characters, nine UTF-16 units
        let issues = evaluate("A😀😀😀!a", "", "");
        assert_eq!(issues, vec![TOO_SHORT.to_string()]);

        let issues = evaluate("Añoñoñ!x", "", "");
        assert!(issues.is_empty());
    }

    #[test]
    fn non_ascii_letters_count_as_special() {
        let issues = evaluate("Contraseñaa", "", "");
        assert!(!issues.contains(&MISSING_SPECIAL.to_string()));
    }

    #[test]
    fn first_name_match_is_case_insensitive() {
        let issues = evaluate("Secret1!", "Secret", "X");
        assert_eq!(issues, vec![CONTAINS_FIRST_NAME.to_string()]);

        let issues = evaluate("xxSECRETxx!", "  secret ", "");
        assert!(issues.contains(&CONTAINS_FIRST_NAME.to_string()));
    }

    #[test]
    fn short_names_are_ignored() {
        let issues = evaluate("Lee!Annxx", "An ", " Le");
        assert!(!issues.contains(&CONTAINS_FIRST_NAME.to_string()));
        assert!(!issues.contains(&CONTAINS_LAST_NAME.to_string()));

        let issues = evaluate("Lee!Annxx", "Ann", "Lee");
        assert!(issues.contains(&CONTAINS_LAST_NAME.to_string()));
        assert!(issues.contains(&CONTAINS_FIRST_NAME.to_string()));
    }

    #[test]
    fn all_rules_are_reported_in_order() {
        let issues = evaluate("ana", "Ana", "ana");
        assert_eq!(
            issues,
            vec![
                TOO_SHORT.to_string(),
                MISSING_UPPERCASE.to_string(),
                MISSING_SPECIAL.to_string(),
                CONTAINS_FIRST_NAME.to_string(),
                CONTAINS_LAST_NAME.to_string(),
            ]
        );
    }
}
