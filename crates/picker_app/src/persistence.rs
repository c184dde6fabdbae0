use engine_logging::{engine_info, engine_warn};
use picker_engine::KeyValueStore;

use crate::i18n::Locale;

const LOCALE_KEY: &str = "locale";

pub(crate) fn load_locale(store: &KeyValueStore) -> Locale {
    match store.get(LOCALE_KEY) {
        Ok(Some(raw)) => Locale::parse(&raw).unwrap_or_else(|| {
            engine_warn!("Ignoring unknown saved locale {:?}", raw);
            Locale::default()
        }),
        Ok(None) => Locale::default(),
        Err(err) => {
            engine_warn!("Failed to read saved locale: {}", err);
            Locale::default()
        }
    }
}

pub(crate) fn save_locale(store: &KeyValueStore, locale: Locale) {
    match store.set(LOCALE_KEY, locale.code()) {
        Ok(path) => engine_info!("Saved locale {} to {:?}", locale.code(), path),
        Err(err) => engine_warn!("Failed to save locale: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_round_trips_and_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = KeyValueStore::new(temp.path(), "valo");
        assert_eq!(load_locale(&store), Locale::En);

        save_locale(&store, Locale::Es);
        assert_eq!(load_locale(&store), Locale::Es);

        store.set(LOCALE_KEY, "klingon").unwrap();
        assert_eq!(load_locale(&store), Locale::En);
    }
}
