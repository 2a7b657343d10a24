use crate::lookup::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextIntent,
    PrevIntent,
    SetIntent(Intent),

    InputChar(char),
    InputText(String),
    Backspace,
    ClearInput,
    Submit,

    ResolutionUp,
    ResolutionDown,
    Download,
    OpenPage,

    ToggleHelp,
    Resize,
}
