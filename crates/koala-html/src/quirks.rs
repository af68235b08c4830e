//! [§ 13.2.6.2 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
//!
//! Static DOCTYPE identifier tables and the quirks-mode decision function.
//! These lists are the ones defined by the HTML5 parsing algorithm and are
//! treated as a fixed data contract rather than something to be tuned.

/// Public identifiers that force quirks mode when the DOCTYPE's public
/// identifier is an exact, case-insensitive match.
pub const PUB_ID_EQUALS: &[&str] = &[
    "-//W3O//DTD W3 HTML Strict 3.0//EN//",
    "-/W3C/DTD HTML 4.0 Transitional/EN",
    "HTML",
];

/// System identifiers that force quirks mode when the DOCTYPE's system
/// identifier is an exact, case-insensitive match.
pub const SYS_ID_EQUALS: &[&str] = &["http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"];

/// Public identifier prefixes that force quirks mode on a case-insensitive
/// `starts_with` match, regardless of whether a system identifier is present.
pub const PUB_ID_STARTS: &[&str] = &[
    "+//Silmaril//dtd html Pro v0r11 19970101//",
    "-//AS//DTD HTML 3.0 asWedit + extensions//",
    "-//AdvaSoft Ltd//DTD HTML 3.0 asWedit + extensions//",
    "-//IETF//DTD HTML 2.0 Level 1//",
    "-//IETF//DTD HTML 2.0 Level 2//",
    "-//IETF//DTD HTML 2.0 Strict Level 1//",
    "-//IETF//DTD HTML 2.0 Strict Level 2//",
    "-//IETF//DTD HTML 2.0 Strict//",
    "-//IETF//DTD HTML 2.0//",
    "-//IETF//DTD HTML 2.1E//",
    "-//IETF//DTD HTML 3.0//",
    "-//IETF//DTD HTML 3.2 Final//",
    "-//IETF//DTD HTML 3.2//",
    "-//IETF//DTD HTML 3//",
    "-//IETF//DTD HTML Level 0//",
    "-//IETF//DTD HTML Level 1//",
    "-//IETF//DTD HTML Level 2//",
    "-//IETF//DTD HTML Level 3//",
    "-//IETF//DTD HTML Strict Level 0//",
    "-//IETF//DTD HTML Strict Level 1//",
    "-//IETF//DTD HTML Strict Level 2//",
    "-//IETF//DTD HTML Strict Level 3//",
    "-//IETF//DTD HTML Strict//",
    "-//IETF//DTD HTML//",
    "-//Metrius//DTD Metrius Presentational//",
    "-//Microsoft//DTD Internet Explorer 2.0 HTML Strict//",
    "-//Microsoft//DTD Internet Explorer 2.0 HTML//",
    "-//Microsoft//DTD Internet Explorer 2.0 Tables//",
    "-//Microsoft//DTD Internet Explorer 3.0 HTML Strict//",
    "-//Microsoft//DTD Internet Explorer 3.0 HTML//",
    "-//Microsoft//DTD Internet Explorer 3.0 Tables//",
    "-//Netscape Comm. Corp.//DTD HTML//",
    "-//Netscape Comm. Corp.//DTD Strict HTML//",
    "-//O'Reilly and Associates//DTD HTML 2.0//",
    "-//O'Reilly and Associates//DTD HTML Extended 1.0//",
    "-//O'Reilly and Associates//DTD HTML Extended Relaxed 1.0//",
    "-//SQ//DTD HTML 2.0 HoTMetaL + extensions//",
    "-//SoftQuad Software//DTD HoTMetaL PRO 6.0::19990601::extensions to HTML 4.0//",
    "-//SoftQuad//DTD HoTMetaL PRO 4.0::19971010::extensions to HTML 4.0//",
    "-//Spyglass//DTD HTML 2.0 Extended//",
    "-//Sun Microsystems Corp.//DTD HotJava HTML//",
    "-//Sun Microsystems Corp.//DTD HotJava Strict HTML//",
    "-//W3C//DTD HTML 3 1995-03-24//",
    "-//W3C//DTD HTML 3.2 Draft//",
    "-//W3C//DTD HTML 3.2 Final//",
    "-//W3C//DTD HTML 3.2//",
    "-//W3C//DTD HTML 3.2S Draft//",
    "-//W3C//DTD HTML 4.0 Frameset//",
    "-//W3C//DTD HTML 4.0 Transitional//",
    "-//W3C//DTD HTML Experimental 19960712//",
    "-//W3C//DTD HTML Experimental 970421//",
    "-//W3C//DTD W3 HTML//",
    "-//W3O//DTD W3 HTML 3.0//",
    "-//WebTechs//DTD Mozilla HTML 2.0//",
    "-//WebTechs//DTD Mozilla HTML//",
    // These two are "limited quirks" upstream; this implementation collapses
    // limited quirks into full quirks (see design notes on quirks mode).
    "-//W3C//DTD XHTML 1.0 Frameset//",
    "-//W3C//DTD XHTML 1.0 Transitional//",
];

/// Public identifier prefixes that force quirks mode only when the DOCTYPE
/// has no system identifier.
pub const PUB_ID_STARTS_NO_SYS_ID: &[&str] = &[
    "-//W3C//DTD HTML 4.01 Frameset//",
    "-//W3C//DTD HTML 4.01 Transitional//",
];

/// The result of running the quirks-mode decision algorithm over a DOCTYPE
/// token, per [§ 13.2.6.2](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuirksMode {
    /// No quirks: standards mode.
    NoQuirks,
    /// Quirks mode: legacy-compatible rendering behavior.
    Quirks,
}

/// Determine whether a DOCTYPE forces quirks mode.
///
/// Implements the decision in [§ 13.2.6.2](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode):
/// quirks mode is forced if the tokenizer already raised `force_quirks`, if
/// the DOCTYPE name is not `"html"`, if the public identifier matches
/// [`PUB_ID_EQUALS`] or starts with any entry of [`PUB_ID_STARTS`], if the
/// system identifier matches [`SYS_ID_EQUALS`], or if the public identifier
/// starts with any entry of [`PUB_ID_STARTS_NO_SYS_ID`] and no system
/// identifier is present.
///
/// "Limited quirks" (a third mode implied by the upstream identifier lists
/// when a system identifier accompanies certain public identifiers) is
/// collapsed into full quirks, matching the minimal decision table this
/// implementation targets.
#[must_use]
pub fn determine_quirks_mode(
    name: Option<&str>,
    public_identifier: Option<&str>,
    system_identifier: Option<&str>,
    force_quirks: bool,
) -> QuirksMode {
    if force_quirks {
        return QuirksMode::Quirks;
    }

    if name != Some("html") {
        return QuirksMode::Quirks;
    }

    if let Some(pub_id) = public_identifier {
        let pub_id_lower = pub_id.to_ascii_lowercase();

        if PUB_ID_EQUALS.iter().any(|s| s.to_ascii_lowercase() == pub_id_lower) {
            return QuirksMode::Quirks;
        }

        if PUB_ID_STARTS.iter().any(|s| pub_id_lower.starts_with(&s.to_ascii_lowercase())) {
            return QuirksMode::Quirks;
        }
    }

    if let Some(sys_id) = system_identifier {
        let sys_id_lower = sys_id.to_ascii_lowercase();

        if SYS_ID_EQUALS.iter().any(|s| s.to_ascii_lowercase() == sys_id_lower) {
            return QuirksMode::Quirks;
        }
    }

    if let Some(pub_id) = public_identifier
        && system_identifier.is_none()
    {
        let pub_id_lower = pub_id.to_ascii_lowercase();
        if PUB_ID_STARTS_NO_SYS_ID
            .iter()
            .any(|s| pub_id_lower.starts_with(&s.to_ascii_lowercase()))
        {
            return QuirksMode::Quirks;
        }
    }

    QuirksMode::NoQuirks
}

#[cfg(test)]
mod tests {
    use super::{determine_quirks_mode, QuirksMode};

    #[test]
    fn html5_doctype_is_no_quirks() {
        let result = determine_quirks_mode(Some("html"), None, None, false);
        assert_eq!(result, QuirksMode::NoQuirks);
    }

    #[test]
    fn force_quirks_flag_wins() {
        let result = determine_quirks_mode(Some("html"), None, None, true);
        assert_eq!(result, QuirksMode::Quirks);
    }

    #[test]
    fn non_html_name_is_quirks() {
        let result = determine_quirks_mode(Some("not-html"), None, None, false);
        assert_eq!(result, QuirksMode::Quirks);
    }

    #[test]
    fn legacy_public_id_prefix_is_quirks() {
        let result = determine_quirks_mode(
            Some("html"),
            Some("-//IETF//DTD HTML 2.0//EN"),
            None,
            false,
        );
        assert_eq!(result, QuirksMode::Quirks);
    }

    #[test]
    fn html401_transitional_without_system_id_is_quirks() {
        let result = determine_quirks_mode(
            Some("html"),
            Some("-//W3C//DTD HTML 4.01 Transitional//EN"),
            None,
            false,
        );
        assert_eq!(result, QuirksMode::Quirks);
    }

    #[test]
    fn html401_transitional_with_system_id_is_no_quirks() {
        let result = determine_quirks_mode(
            Some("html"),
            Some("-//W3C//DTD HTML 4.01 Transitional//EN"),
            Some("http://www.w3.org/TR/html4/loose.dtd"),
            false,
        );
        assert_eq!(result, QuirksMode::NoQuirks);
    }

    #[test]
    fn ibm_system_id_is_quirks() {
        let result = determine_quirks_mode(
            Some("html"),
            None,
            Some("http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"),
            false,
        );
        assert_eq!(result, QuirksMode::Quirks);
    }
}
