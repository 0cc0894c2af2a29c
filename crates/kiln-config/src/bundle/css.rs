//! Stylesheet chain options.
//!
//! The chain is declared extract → css → postcss → resolve-url → sass and
//! runs in reverse, so Sass compiles first and extraction happens last.

use serde_json::{Value, json};

use crate::bundle::rule::{Loader, Step};

/// Loaders that run after `css-loader` and must see `@import`ed files too.
pub const CSS_IMPORT_LOADERS: u8 = 1;

pub(crate) fn css_loader_options() -> Value {
    json!({
        "importLoaders": CSS_IMPORT_LOADERS,
        "url": false,
    })
}

pub(crate) fn postcss_options() -> Value {
    json!({
        "postcssOptions": {
            "plugins": [
                ["autoprefixer", { "grid": true }]
            ],
            "sourceMap": true,
        }
    })
}

pub(crate) fn sass_options() -> Value {
    json!({ "sourceMap": true })
}

/// Steps for `.css`, `.sass` and `.scss` files in declaration order.
pub(crate) fn stylesheet_steps(minify: bool) -> Vec<Step> {
    let mut steps = vec![
        Step::new(Loader::CssExtract),
        Step::with_options(Loader::Css, css_loader_options()),
        Step::with_options(Loader::PostCss, postcss_options()),
        Step::new(Loader::ResolveUrl),
        Step::with_options(Loader::Sass, sass_options()),
    ];

    if minify {
        steps.push(Step::new(Loader::CssMinimize));
    }

    steps
}
