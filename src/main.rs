// gradebook: interactive student-records manager

use std::io;

use crossterm::tty::IsTty;

use gradebook::session::theme::Theme;
use gradebook::session::Session;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let theme = if stdout.is_tty() {
        Theme::colored()
    } else {
        Theme::plain()
    };
    let mut session = Session::new(stdin.lock(), stdout.lock(), theme);
    session.run()
}
