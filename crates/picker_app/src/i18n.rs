//! Display strings for the three supported locales.
//!
//! Lookups fall back to English, then to the key itself. `{name}`
//! placeholders are filled from the supplied parameters; unknown ones
//! render as empty.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(raw))
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => EN,
            Locale::Es => ES,
            Locale::Fr => FR,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dictionary {
    locale: Locale,
}

impl Dictionary {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn t(&self, key: &str) -> String {
        self.lookup(key).to_string()
    }

    pub fn tf(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(self.lookup(key), params)
    }

    fn lookup<'k>(&self, key: &'k str) -> &'k str {
        find(self.locale.table(), key)
            .or_else(|| find(EN, key))
            .unwrap_or(key)
    }
}

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        let name = &rest[open + 1..open + close];
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            out.push_str(&rest[..=open]);
            rest = &rest[open + 1..];
            continue;
        }
        out.push_str(&rest[..open]);
        if let Some((_, value)) = params.iter().find(|(param, _)| *param == name) {
            out.push_str(value);
        }
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}

const EN: &[(&str, &str)] = &[
    ("home.title", "Valorant Agent Randomizer."),
    ("home.desc", "Disable agents you don't want, then pick a random one from the rest."),
    ("agents.enabled", "Enabled {n} / {total}"),
    ("agents.enableAll", "Enable all"),
    ("agents.disableAll", "Disable all"),
    ("agents.pick", "Pick Random"),
    ("agents.picking", "Picking..."),
    ("agents.empty", "No agents loaded yet."),
    ("agents.noPool", "No enabled agents in this tab."),
    ("agents.loading", "Refreshing agent list..."),
    ("tab.all", "All"),
    ("role.duelist", "Duelist"),
    ("role.controller", "Controller"),
    ("role.sentinel", "Sentinel"),
    ("role.initiator", "Initiator"),
    ("reveal.disable", "Disable Agent"),
    ("reveal.disabled", "Disabled"),
    ("reveal.repick", "Repick"),
    ("reveal.close", "Close"),
    ("lang.label", "Language"),
    ("cli.prompt", "Type `help` for commands."),
    (
        "cli.help",
        "Commands: list | toggle <agent> | enable-all | disable-all | tab <all|role> | pick | repick | disable | close | refresh | lang <en|es|fr> | quit",
    ),
    ("cli.unknown", "Unknown command: {input}"),
    ("cli.noAgent", "No agent named {name}."),
    ("cli.busy", "Close the current result first."),
];

const ES: &[(&str, &str)] = &[
    ("home.title", "Aleatorizador de Agentes de Valorant."),
    ("home.desc", "Deshabilita los agentes que no quieras y elige uno al azar del resto."),
    ("agents.enabled", "Habilitados {n} / {total}"),
    ("agents.enableAll", "Habilitar todo"),
    ("agents.disableAll", "Deshabilitar todo"),
    ("agents.pick", "Elegir al azar"),
    ("agents.picking", "Eligiendo..."),
    ("agents.empty", "Aún no hay agentes cargados."),
    ("agents.noPool", "No hay agentes habilitados en esta pestaña."),
    ("agents.loading", "Actualizando la lista de agentes..."),
    ("tab.all", "Todos"),
    ("role.duelist", "Duelista"),
    ("role.controller", "Controlador"),
    ("role.sentinel", "Centinela"),
    ("role.initiator", "Iniciador"),
    ("reveal.disable", "Deshabilitar agente"),
    ("reveal.disabled", "Deshabilitado"),
    ("reveal.repick", "Volver a elegir"),
    ("reveal.close", "Cerrar"),
    ("lang.label", "Idioma"),
    ("cli.prompt", "Escribe `help` para ver los comandos."),
    ("cli.unknown", "Comando desconocido: {input}"),
    ("cli.noAgent", "No hay ningún agente llamado {name}."),
    ("cli.busy", "Cierra primero el resultado actual."),
];

const FR: &[(&str, &str)] = &[
    ("home.title", "Randomiseur d'agents Valorant."),
    ("home.desc", "Désactivez les agents non voulus, puis tirez-en un au hasard parmi le reste."),
    ("agents.enabled", "Activés {n} / {total}"),
    ("agents.enableAll", "Activer tout"),
    ("agents.disableAll", "Désactiver tout"),
    ("agents.pick", "Tirage au sort"),
    ("agents.picking", "Tirage..."),
    ("agents.empty", "Aucun agent chargé pour l'instant."),
    ("agents.noPool", "Aucun agent activé dans cet onglet."),
    ("agents.loading", "Actualisation de la liste des agents..."),
    ("tab.all", "Tous"),
    ("role.duelist", "Dueliste"),
    ("role.controller", "Contrôleur"),
    ("role.sentinel", "Sentinelle"),
    ("role.initiator", "Initiateur"),
    ("reveal.disable", "Désactiver l'agent"),
    ("reveal.disabled", "Désactivé"),
    ("reveal.repick", "Re-tirer"),
    ("reveal.close", "Fermer"),
    ("lang.label", "Langue"),
    ("cli.prompt", "Tapez `help` pour la liste des commandes."),
    ("cli.unknown", "Commande inconnue : {input}"),
    ("cli.noAgent", "Aucun agent nommé {name}."),
    ("cli.busy", "Fermez d'abord le résultat en cours."),
];
