use page::Severity;

/// Required DOM scaffolding missing at bind time. This is an integration
/// error: the affected script fails its setup loudly instead of silently
/// rendering nothing, but other scripts keep initializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingNotificationContainer,
    MissingTemplateRegistry,
    MissingTemplate(Severity),
    MissingContentRoot,
    MissingMainColumn,
    MissingToc,
    MissingTopBar,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingNotificationContainer => {
                write!(f, "no [id=notification] container in scope")
            }
            ConfigError::MissingTemplateRegistry => {
                write!(f, "notification container has no template registry")
            }
            ConfigError::MissingTemplate(sev) => {
                write!(f, "no template for severity class {:?}", sev.class_name())
            }
            ConfigError::MissingContentRoot => write!(f, "no [id=content] element in scope"),
            ConfigError::MissingMainColumn => write!(f, "no [id=main] element in scope"),
            ConfigError::MissingToc => write!(f, "no .side-bar.toc element in scope"),
            ConfigError::MissingTopBar => write!(f, "no div.top-bar element in scope"),
        }
    }
}

impl std::error::Error for ConfigError {}
