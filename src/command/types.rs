#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    DebugStatusToggle,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    DebugStatusToggle,
    Quit,
    Input,
    DocumentLoad,
    RenderPage,
    Analytics,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstPage => "first-page",
            Self::PrevPage => "prev-page",
            Self::NextPage => "next-page",
            Self::LastPage => "last-page",
            Self::DebugStatusToggle => "debug-status-toggle",
            Self::Quit => "quit",
            Self::Input => "input",
            Self::DocumentLoad => "document-load",
            Self::RenderPage => "render-page",
            Self::Analytics => "analytics",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::FirstPage => ActionId::FirstPage,
            Self::PrevPage => ActionId::PrevPage,
            Self::NextPage => ActionId::NextPage,
            Self::LastPage => ActionId::LastPage,
            Self::DebugStatusToggle => ActionId::DebugStatusToggle,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}
