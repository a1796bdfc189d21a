use console::{StyledObject, style};

pub fn header(s: impl ToString) -> StyledObject<String> {
    style(s.to_string()).cyan().bold()
}

pub fn bold(s: impl ToString) -> StyledObject<String> {
    style(s.to_string()).bold()
}

pub fn dim(s: impl ToString) -> StyledObject<String> {
    style(s.to_string()).dim()
}

pub fn edim(s: impl ToString) -> StyledObject<String> {
    style(s.to_string()).for_stderr().dim()
}

pub fn eyellow(s: impl ToString) -> StyledObject<String> {
    style(s.to_string()).for_stderr().yellow().bold()
}

pub fn ered(s: impl ToString) -> StyledObject<String> {
    style(s.to_string()).for_stderr().red().bold()
}
