//! Resolution of partial host options into complete [`PickerOptions`].

use crate::model::{PartialPickerOptions, PickerOptions};

/// Turns host-supplied options into fully defaulted ones.
pub trait OptionsResolver: Send + Sync + 'static {
    fn resolve(&self, options: PartialPickerOptions) -> PickerOptions;
}

/// Fills every missing field from [`PickerOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct DefaultOptionsResolver {
    defaults: PickerOptions,
}

impl DefaultOptionsResolver {
    pub fn with_defaults(defaults: PickerOptions) -> Self {
        Self { defaults }
    }
}

impl OptionsResolver for DefaultOptionsResolver {
    fn resolve(&self, options: PartialPickerOptions) -> PickerOptions {
        let defaults = self.defaults.clone();
        PickerOptions {
            locale: options.locale.unwrap_or(defaults.locale),
            data_store: options.data_store.unwrap_or(defaults.data_store),
            messages: options.messages.or(defaults.messages),
            emoji_data: options.emoji_data.or(defaults.emoji_data),
            custom: options.custom.unwrap_or(defaults.custom),
            renderer: options.renderer.unwrap_or(defaults.renderer),
            i18n: options.i18n.unwrap_or(defaults.i18n),
            emojis_per_row: options.emojis_per_row.unwrap_or(defaults.emojis_per_row),
            visible_rows: options.visible_rows.unwrap_or(defaults.visible_rows),
            show_preview: options.show_preview.unwrap_or(defaults.show_preview),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocaleKey, Renderer};

    #[test]
    fn empty_options_get_defaults() {
        let resolved = DefaultOptionsResolver::default().resolve(PartialPickerOptions::default());
        assert_eq!(resolved, PickerOptions::default());
        assert_eq!(resolved.locale, LocaleKey::new("en"));
        assert_eq!(resolved.emojis_per_row, 8);
    }

    #[test]
    fn supplied_fields_are_kept() {
        let partial = PartialPickerOptions {
            renderer: Some(Renderer::Image { url_template: "{code}.svg".into() }),
            show_preview: Some(false),
            ..PartialPickerOptions::default().with_locale("pt")
        };
        let resolved = DefaultOptionsResolver::default().resolve(partial);

        assert_eq!(resolved.locale, LocaleKey::new("pt"));
        assert!(!resolved.show_preview);
        assert_eq!(resolved.renderer, Renderer::Image { url_template: "{code}.svg".into() });
        assert_eq!(resolved.visible_rows, 6);
    }

    #[test]
    fn host_defaults_replace_builtin_ones() {
        let resolver = DefaultOptionsResolver::with_defaults(PickerOptions {
            locale: LocaleKey::new("es"),
            ..PickerOptions::default()
        });
        assert_eq!(resolver.resolve(PartialPickerOptions::default()).locale, LocaleKey::new("es"));
    }
}
