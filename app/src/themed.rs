//! Themed "directive": imperative DOM styling driven by the theme store.
//!
//! A component binds a `NodeRef` to an element and calls [`themed`]
//! once at setup. The registered effect re-applies classes and inline
//! styles on every mode change, touching only the bound node. The
//! effect is owned by the calling component's reactive scope, so it is
//! disposed together with the component and never fires against a
//! detached node.

use lams_core::theme::{PaletteRole, ThemeMode, ThemePalette};
use leptos::html::Div;
use leptos::prelude::*;

use crate::stores::ThemeStore;

/// What the directive should touch on the bound element.
#[derive(Clone, Copy)]
pub struct ThemedOptions {
    /// Set `background-color` from the palette's surface color.
    pub background: bool,
    /// Set `color` from the palette's text color.
    pub text: bool,
    /// Set `border-color` from the per-mode border color.
    pub border: bool,
    /// Extra class applied in light mode.
    pub light_class: Option<&'static str>,
    /// Extra class applied in dark mode.
    pub dark_class: Option<&'static str>,
    /// Overwrite the text color with one named palette entry.
    pub color_role: Option<PaletteRole>,
}

impl Default for ThemedOptions {
    fn default() -> Self {
        ThemedOptions {
            background: true,
            text: true,
            border: false,
            light_class: None,
            dark_class: None,
            color_role: None,
        }
    }
}

/// Re-style `node_ref`'s element on every theme change.
pub fn themed(node_ref: NodeRef<Div>, theme: ThemeStore, opts: ThemedOptions) {
    Effect::new(move || {
        let mode = theme.mode();
        let palette = theme.palette();
        // NodeRef is tracked: the effect re-runs once the node mounts.
        let Some(el) = node_ref.get() else {
            return;
        };

        let class_list = el.class_list();
        // Removals are idempotent - safe when the class is absent.
        let _ = class_list.remove_2(
            ThemeMode::Light.themed_class(),
            ThemeMode::Dark.themed_class(),
        );
        if let Some(class) = opts.light_class {
            let _ = class_list.remove_1(class);
        }
        if let Some(class) = opts.dark_class {
            let _ = class_list.remove_1(class);
        }

        let _ = class_list.add_1(mode.themed_class());
        let custom = match mode {
            ThemeMode::Light => opts.light_class,
            ThemeMode::Dark => opts.dark_class,
        };
        if let Some(class) = custom {
            let _ = class_list.add_1(class);
        }

        // Fully qualified: `leptos::prelude::*` pulls in a `style(S)`
        // extension trait that would otherwise shadow this getter.
        let style = web_sys::HtmlElement::style(&el);
        if opts.background {
            let _ = style.set_property("background-color", palette.surface);
        }
        if opts.text {
            let _ = style.set_property("color", palette.text);
        }
        if opts.border {
            let _ = style.set_property("border-color", ThemePalette::border_color(mode));
        }
        if let Some(role) = opts.color_role {
            let _ = style.set_property("color", palette.color(role));
        }
        let _ = style.set_property("transition", "all 0.3s ease");
    });
}
