use color_eyre::eyre::Result;

use crate::{
    core::{cmd::Cmd, msg::Msg},
    infrastructure::storage::{save_language, LanguageStore},
};

/// Runs commands produced by `update` against the outside world
pub struct CmdExecutor {
    store: Box<dyn LanguageStore>,
}

impl CmdExecutor {
    pub fn new(store: Box<dyn LanguageStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn LanguageStore {
        self.store.as_ref()
    }

    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::PersistLanguage(language) => {
                save_language(self.store.as_mut(), *language)?;
                log::info!("Persisted language {language}");
            }
        }
        Ok(())
    }

    /// Executes all commands. Failures never abort: they are logged and
    /// reported back as status messages.
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Vec<Msg> {
        commands
            .iter()
            .filter_map(|cmd| match self.execute_command(cmd) {
                Ok(()) => None,
                Err(e) => {
                    log::error!("Failed to execute {cmd:?}: {e:?}");
                    Some(Msg::ShowStatus(format!("Error: {e}")))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::Language,
        infrastructure::storage::{load_language, MemoryStore},
    };

    struct FailingStore;

    impl LanguageStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(eyre!("disk full"))
        }
    }

    #[test]
    fn test_persist_language() {
        let mut executor = CmdExecutor::new(Box::new(MemoryStore::default()));
        let msgs = executor.execute_commands(&[Cmd::PersistLanguage(Language::Lt)]);
        assert!(msgs.is_empty());
        assert_eq!(load_language(executor.store()), Language::Lt);
    }

    #[test]
    fn test_failure_becomes_status_message() {
        let mut executor = CmdExecutor::new(Box::new(FailingStore));
        let msgs = executor.execute_commands(&[Cmd::PersistLanguage(Language::En)]);
        assert_eq!(msgs, vec![Msg::ShowStatus("Error: disk full".to_owned())]);
    }
}
