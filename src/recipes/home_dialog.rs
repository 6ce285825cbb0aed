//! Patches for the identity verification dialog on the home page
//!
//! Intended order: `fix-dialog`, then `remove-duplicate-x`, then
//! `add-animated-tabs`. Each one expects the file state the previous one
//! leaves behind.

use crate::error::Result;
use crate::patch::{Occurrence, Patcher, Pattern, Replacement, Tier};

use super::{Messages, Recipe};

/// Page the built-in recipes edit, relative to the working directory
pub const HOME_PAGE: &str = "client/src/pages/home.tsx";

const VERIFY_HEADER_CLOSE: &str = r#"(<h2 className="text-xl font-bold text-slate-900 dark:text-white">Verify Your Identity</h2>\s*</div>)"#;

const TABS_MARKUP: &str = r#"
                                      <div className="flex items-center gap-1 p-1 bg-slate-100 dark:bg-slate-800/50 rounded-lg w-fit mt-4">
                                        <button className="px-3 py-1.5 text-xs font-medium rounded-md bg-white dark:bg-slate-700 shadow-sm text-slate-900 dark:text-white transition-all">
                                          Tab 1
                                        </button>
                                        <button className="px-3 py-1.5 text-xs font-medium rounded-md text-slate-500 dark:text-slate-400 hover:text-slate-900 dark:hover:text-white transition-all">
                                          Tab 2
                                        </button>
                                        <button className="px-3 py-1.5 text-xs font-medium rounded-md text-slate-500 dark:text-slate-400 hover:text-slate-900 dark:hover:text-white transition-all">
                                          Tab 3
                                        </button>
                                      </div>"#;

const EMPTY_PANEL: &str = r#"<div className="w-full md:w-1/2 p-8 flex flex-col justify-between relative">\s*<div className="space-y-6">\s*</div>\s*</div>"#;

const VERIFY_PANEL: &str = r#"<div className="w-full md:w-1/2 p-8 flex flex-col justify-between relative">
                                    <div className="space-y-6">
                                      <div className="flex justify-between items-center">
                                        <h2 className="text-xl font-bold text-slate-900 dark:text-white">Verify Your Identity</h2>
                                        <DialogTrigger asChild>
                                          <Button size="icon" variant="ghost" className="h-6 w-6 rounded-full opacity-60 hover:opacity-100">
                                            <X className="h-4 w-4" />
                                          </Button>
                                        </DialogTrigger>
                                      </div>
                                      
                                      <p className="text-sm text-slate-500 dark:text-slate-400">
                                        Enter your secure PIN to complete verification.
                                      </p>

                                      <div className="space-y-4 pt-4">
                                        <div className="relative group">
                                          <Input 
                                            placeholder="Enter verification PIN" 
                                            className="h-12 bg-slate-50 dark:bg-slate-800/50 border-slate-200 dark:border-slate-800 rounded-xl px-4 text-slate-900 dark:text-white placeholder:text-slate-400 focus-visible:ring-1 focus-visible:ring-blue-500/50 transition-all"
                                            type="password"
                                            data-testid="input-verification-pin"
                                          />
                                        </div>
                                      </div>
                                    </div>

                                    <div className="flex items-center gap-3 pt-6">
                                      <DialogTrigger asChild>
                                        <Button 
                                          variant="outline" 
                                          className="flex-1 h-11 rounded-xl border-slate-200 dark:border-slate-800 text-slate-600 dark:text-slate-400 hover:bg-slate-50 dark:hover:bg-slate-800/50"
                                          data-testid="button-cancel-verify"
                                        >
                                          Cancel
                                        </Button>
                                      </DialogTrigger>
                                      <Button 
                                        className="flex-1 h-11 rounded-xl bg-slate-500 hover:bg-slate-600 text-white shadow-lg shadow-slate-500/20"
                                        data-testid="button-verify-identity"
                                      >
                                        Verify Identity
                                      </Button>
                                    </div>
                                  </div>"#;

const HEADER_WITH_CLOSE: &str = r#"                                      <div className="flex justify-between items-center">
                                        <h2 className="text-xl font-bold text-slate-900 dark:text-white">Verify Your Identity</h2>
                                        <DialogTrigger asChild>
                                          <Button size="icon" variant="ghost" className="h-6 w-6 rounded-full opacity-60 hover:opacity-100">
                                            <X className="h-4 w-4" />
                                          </Button>
                                        </DialogTrigger>
                                      </div>"#;

const HEADER: &str = r#"                                      <div className="flex justify-between items-center">
                                        <h2 className="text-xl font-bold text-slate-900 dark:text-white">Verify Your Identity</h2>
                                      </div>"#;

fn messages(
    applied: &str,
    applied_fallback: Option<&str>,
    not_found: &str,
    not_found_fallback: Option<&str>,
) -> Messages {
    Messages {
        applied: Some(applied.to_string()),
        applied_fallback: applied_fallback.map(str::to_string),
        not_found: Some(not_found.to_string()),
        not_found_fallback: not_found_fallback.map(str::to_string),
    }
}

/// Insert a tab bar right below the dialog header
pub fn add_animated_tabs() -> Result<Recipe> {
    let template = format!("${{1}}{}", TABS_MARKUP.replace('$', "$$"));
    let patcher = Patcher::new(vec![Tier::new(
        "regex",
        Pattern::regex(VERIFY_HEADER_CLOSE)?,
        Replacement::Template(template),
    )])
    .with_occurrence(Occurrence::All);

    Ok(Recipe::new("add-animated-tabs", HOME_PAGE, patcher).with_messages(messages(
        "Animated tabs added successfully",
        None,
        "Pattern not found for tab insertion",
        None,
    )))
}

/// Fill the empty right-hand panel with the PIN verification form
pub fn fix_dialog() -> Result<Recipe> {
    let patcher = Patcher::new(vec![Tier::new(
        "regex",
        Pattern::regex(EMPTY_PANEL)?,
        Replacement::Literal(VERIFY_PANEL.to_string()),
    )])
    .with_occurrence(Occurrence::All);

    Ok(Recipe::new("fix-dialog", HOME_PAGE, patcher).with_messages(messages(
        "Replacement successful",
        None,
        "Pattern not found",
        None,
    )))
}

/// Drop the close button next to the "Verify Your Identity" title
pub fn remove_duplicate_x() -> Result<Recipe> {
    let patcher = Patcher::new(vec![
        Tier::new(
            "exact",
            Pattern::literal(HEADER_WITH_CLOSE)?,
            Replacement::Literal(HEADER.to_string()),
        ),
        Tier::new(
            "fuzzy",
            Pattern::fuzzy(HEADER_WITH_CLOSE)?,
            Replacement::Literal(HEADER.trim_start().to_string()),
        ),
    ])
    .with_occurrence(Occurrence::All);

    Ok(Recipe::new("remove-duplicate-x", HOME_PAGE, patcher).with_messages(messages(
        "Duplicate X icon removed successfully",
        Some("Duplicate X icon removed successfully via regex"),
        "Pattern not found",
        Some("Specific target not found, trying fuzzy match... Pattern not found"),
    )))
}
