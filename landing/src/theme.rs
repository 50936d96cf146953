//! Tailwind configuration for the landing page.
//!
//! `landing/tailwind.config.js` is generated from [`TailwindConfig`]; the
//! prerender tool can emit it with `--emit-tailwind-config`.

/// Utility class prefix declared in the config.
pub const CLASS_PREFIX: &str = "tw-";
/// Brand color, `theme.extend.colors.primary`.
pub const PRIMARY_COLOR: &str = "#4f55c1";
/// Files Tailwind scans for class usage, relative to `landing/`.
pub const CONTENT_GLOBS: &[&str] = &["./index.html", "./src/**/*.rs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailwindConfig {
    pub prefix: &'static str,
    pub important: bool,
    pub primary_color: &'static str,
    pub content: &'static [&'static str],
}

impl TailwindConfig {
    pub const fn las_wg() -> Self {
        Self {
            prefix: CLASS_PREFIX,
            important: false,
            primary_color: PRIMARY_COLOR,
            content: CONTENT_GLOBS,
        }
    }

    /// Render as a `tailwind.config.js` module.
    pub fn to_js(&self) -> String {
        let content: String = self
            .content
            .iter()
            .map(|glob| format!("    \"{glob}\",\n"))
            .collect();

        format!(
            "/** @type {{import('tailwindcss').Config}} */\n\
             module.exports = {{\n  \
               prefix: '{prefix}',\n  \
               important: {important},\n  \
               content: [\n{content}  ],\n  \
               theme: {{\n    \
                 extend: {{\n      \
                   colors: {{\n        \
                     primary: \"{primary}\",\n      \
                   }},\n    \
                 }},\n  \
               }},\n  \
               plugins: [],\n\
             }};\n",
            prefix = self.prefix,
            important = self.important,
            primary = self.primary_color,
        )
    }
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self::las_wg()
    }
}
