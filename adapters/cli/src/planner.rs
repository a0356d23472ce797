use anyhow::{anyhow, bail, Result};
use hive_planner_catalog::Catalog;
use hive_planner_core::{
    BeeSlug, Command, ConfigId, Event, LayoutSnapshot, Level, SavedConfig, SlotIndex,
};
use hive_planner_session::{apply, query, HiveSession};
use hive_planner_storage::{unix_millis, KeyValueStore, LayoutStore};
use hive_planner_system_bootstrap::Bootstrap;
use hive_planner_system_builder::{Builder, BuilderInput, DragSource, PlacementDefaults};
use hive_planner_system_layout_codec as layout_codec;
use hive_planner_system_stats::HiveStats;

/// Wires the session, builder and persistence together for the adapters.
#[derive(Debug)]
pub(crate) struct Planner<S> {
    catalog: Catalog,
    session: HiveSession,
    builder: Builder,
    store: LayoutStore<S>,
}

impl<S> Planner<S>
where
    S: KeyValueStore,
{
    /// Opens a planner, resolving the starting layout from `share_token` or the store.
    ///
    /// Nothing is written until the first committed mutation. When every placed
    /// bee shares one level, that level replaces the configured placement level.
    pub(crate) fn open(
        catalog: Catalog,
        store: LayoutStore<S>,
        defaults: PlacementDefaults,
        max_history: usize,
        share_token: Option<&str>,
    ) -> Self {
        let persisted = store.load_live();
        let (layout, origin) =
            Bootstrap.initial_layout(share_token, persisted.as_deref(), &catalog);
        log::info!(
            "opened hive with {} bees from {origin:?}",
            layout.occupied_count()
        );

        let defaults = match uniform_level(&layout) {
            Some(level) if level != defaults.level => {
                log::debug!("placing new bees at the hive's level {level}");
                PlacementDefaults::new(defaults.gifted, level)
            }
            _ => defaults,
        };

        Self {
            catalog,
            session: HiveSession::with_layout(layout, max_history),
            builder: Builder::new(defaults),
            store,
        }
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn layout(&self) -> &LayoutSnapshot {
        query::layout(&self.session)
    }

    pub(crate) fn defaults(&self) -> PlacementDefaults {
        self.builder.defaults()
    }

    pub(crate) fn can_undo(&self) -> bool {
        query::can_undo(&self.session)
    }

    pub(crate) fn can_redo(&self) -> bool {
        query::can_redo(&self.session)
    }

    pub(crate) fn share_token(&self) -> String {
        layout_codec::encode(self.layout())
    }

    pub(crate) fn stats(&self) -> HiveStats {
        HiveStats::compute(self.layout(), &self.catalog)
    }

    /// Resolves a user supplied bee name or slug against the catalog.
    pub(crate) fn resolve_bee(&self, query: &str) -> Result<BeeSlug> {
        let needle = query.trim();
        if let Some(record) = self.catalog.resolve(needle) {
            return Ok(record.slug.clone());
        }

        self.catalog
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(needle))
            .map(|record| record.slug.clone())
            .ok_or_else(|| anyhow!("unknown bee `{needle}`"))
    }

    /// Drops a catalog bee onto `slot` using the current placement defaults.
    pub(crate) fn place(&mut self, bee: &str, slot: SlotIndex) -> Result<Vec<Event>> {
        let bee = self.resolve_bee(bee)?;
        Ok(self.gesture(BuilderInput::Drop {
            source: DragSource::Palette(bee),
            target: slot,
        }))
    }

    /// Routes a gesture through the builder and applies the resulting commands.
    pub(crate) fn gesture(&mut self, input: BuilderInput) -> Vec<Event> {
        let mut commands = Vec::new();
        let session = &self.session;
        self.builder.handle(
            input,
            |slot| !query::slot(session, slot).is_empty(),
            &mut commands,
        );

        let mut events = Vec::new();
        for command in commands {
            events.extend(self.execute(command));
        }
        events
    }

    /// Applies a command directly, persisting the live layout when it changed.
    pub(crate) fn execute(&mut self, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        apply(&mut self.session, command, &mut events);
        if events.iter().any(Event::changes_layout) {
            self.persist();
        }
        events
    }

    /// Replaces the layout with the one encoded in `token`.
    pub(crate) fn import(&mut self, token: &str) -> Result<Vec<Event>> {
        let decoded = layout_codec::try_decode(token, &self.catalog)?;
        if !decoded.unresolved.is_empty() {
            log::warn!(
                "dropped bees missing from the catalog: {}",
                decoded.unresolved.join(", ")
            );
        }
        Ok(self.execute(Command::ImportLayout {
            layout: decoded.layout,
        }))
    }

    pub(crate) fn saved_configs(&self) -> Vec<SavedConfig> {
        self.store.saved_configs()
    }

    /// Stores the current layout under `name`.
    pub(crate) fn save(&mut self, name: &str) -> Result<SavedConfig> {
        let token = self.share_token();
        Ok(self.store.save_config(name, &token, unix_millis())?)
    }

    /// Replaces the layout with a saved configuration.
    pub(crate) fn load(&mut self, id: &str) -> Result<SavedConfig> {
        let id = ConfigId::new(id.trim());
        let Some(config) = self.store.find_config(&id) else {
            bail!("no saved configuration with id `{id}`");
        };
        let layout = layout_codec::decode(&config.serialized_layout, &self.catalog);
        let _events = self.execute(Command::ImportLayout { layout });
        Ok(config)
    }

    /// Deletes a saved configuration.
    pub(crate) fn delete(&mut self, id: &str) -> Result<()> {
        let id = ConfigId::new(id.trim());
        if !self.store.delete_config(&id)? {
            bail!("no saved configuration with id `{id}`");
        }
        Ok(())
    }

    fn persist(&mut self) {
        let token = layout_codec::encode(query::layout(&self.session));
        self.store.persist_live(&token);
    }
}

/// Level shared by every placed bee, if the hive is non-empty and uniform.
fn uniform_level(layout: &LayoutSnapshot) -> Option<Level> {
    let mut levels = layout
        .slots()
        .iter()
        .filter(|slot| !slot.is_empty())
        .map(|slot| slot.level());
    let first = levels.next()?;
    levels.all(|level| level == first).then_some(first)
}
