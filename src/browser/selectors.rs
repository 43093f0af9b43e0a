//! Selector lookup table
//!
//! Every CSS/XPath string tied to the external site's markup lives here, so
//! a site change touches one file. Selectors are ordered most-specific
//! first; callers try them in sequence and take the first hit.

/// Duolingo homepage
pub const HOME_URL: &str = "https://www.duolingo.com/";

/// Stories grid; explicit story paths are joined onto this
pub const STORIES_URL: &str = "https://www.duolingo.com/stories";

/// Login form page
pub const LOGIN_URL: &str = "https://www.duolingo.com/log-in";

/// Continue/next/check controls inside the story player
pub const CONTINUE_BUTTONS: &[&str] = &[
    "[data-test='stories-player-continue']",
    "[data-test='stories-player-cta']",
    "[data-test='player-continue']",
    "button[data-test*='continue']",
    "button[data-test*='check']",
];

/// Submit controls tried after answering a challenge
pub const CHECK_BUTTONS: &[&str] = &[
    "button[data-test*='check']",
    "[data-test='stories-player-continue']",
    "button[type='submit']",
];

/// Visible labels of generic advance buttons, used when no data-test
/// selector matches
pub const ADVANCE_LABELS: &[&str] = &[
    "Start",
    "Continue",
    "Next",
    "Check",
    "Skip",
    "Got it",
    "Keep going",
    "Done",
];

/// Elements that only appear when the profile is logged out
pub const LOGGED_OUT_MARKERS: &[&str] = &[
    "button[data-test='have-account']",
    "[data-test='email-input']",
];

/// Tap-to-complete sentence tokens (word banks)
pub const TAP_TOKENS: &[&str] = &[
    "[data-test='challenge-tap-token']",
    "[data-test='word-bank'] [role='button']",
    "[data-test*='challenge'] [data-test*='token']",
];

/// Multiple-choice options
pub const CHOICE_OPTIONS: &[&str] = &[
    "[data-test='challenge-choice']",
    "[data-test='challenge-judge-text']",
    "[data-test*='challenge'] [role='radio']",
    "[data-test*='challenge'] [data-test*='option']",
];

/// Free-text challenge inputs
pub const TEXT_INPUTS: &[&str] = &[
    "[data-test='challenge-text-input'] textarea",
    "[data-test='challenge-text-input'] input",
    "textarea",
    "input[type='text']",
];

/// End-of-story markers (streak celebration or finished screen)
pub const COMPLETION_INDICATORS: &[&str] = &["[data-test*='streak']", "[data-test*='finished']"];

/// Story cards on the stories grid
pub const STORY_CARDS: &[&str] = &[
    "[data-test='story-card']",
    "a[href*='/stories/']",
    "[data-test*='story']",
];

/// Username/email input on the login form
pub const LOGIN_EMAIL_INPUTS: &[&str] = &[
    "[data-test='email-input'] input",
    "[data-test='email-input']",
    "input[name='identifier']",
    "input[name='login']",
    "input[name='email']",
    "input[name='username']",
    "input[type='email']",
    "input[autocomplete='username']",
];

/// Password input on the login form
pub const LOGIN_PASSWORD_INPUTS: &[&str] = &[
    "[data-test='password-input'] input",
    "[data-test='password-input']",
    "input[name='password']",
    "input[type='password']",
    "input[autocomplete='current-password']",
];

/// Login form submit controls
pub const LOGIN_SUBMIT_BUTTONS: &[&str] = &[
    "button[data-test='register-button']",
    "button[data-test='login-button']",
    "button[data-test='have-account']",
    "button[type='submit']",
    "[data-test='confirm-button']",
];

/// Expand visible button labels into the XPath variants tried for each:
/// exact and substring matches on buttons and on role=button elements.
pub fn label_xpaths(labels: &[&str]) -> Vec<String> {
    let mut xpaths = Vec::with_capacity(labels.len() * 4);
    for label in labels {
        let label = label.trim();
        xpaths.push(format!("//button[normalize-space()='{label}']"));
        xpaths.push(format!("//button[contains(normalize-space(), '{label}')]"));
        xpaths.push(format!("//*[@role='button' and normalize-space()='{label}']"));
        xpaths.push(format!(
            "//*[@role='button' and contains(normalize-space(), '{label}')]"
        ));
    }
    xpaths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_xpaths_variants() {
        let xpaths = label_xpaths(&["Continue"]);
        assert_eq!(xpaths.len(), 4);
        assert_eq!(xpaths[0], "//button[normalize-space()='Continue']");
        assert!(xpaths[3].contains("@role='button'"));
    }

    #[test]
    fn test_label_xpaths_trims_whitespace() {
        let xpaths = label_xpaths(&[" Got it "]);
        assert!(xpaths.iter().all(|x| x.contains("'Got it'")));
    }
}
