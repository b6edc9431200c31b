use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::profile::render_profile_card;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.endpoint()), header);
    frame.render_widget(Clear, body);
    render_profile_card(frame, body, &app.profile_view, app.avatar_size());
    frame.render_widget(Footer::new().widget(footer, app.activation()), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn draws_header_and_footer() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let app = App::new("https://api.github.com/users/octocat".to_string(), 16);
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("GitHub Profile"));
        assert!(text.contains("api.github.com/users/octocat"));
        assert!(text.contains("Starting"));
    }
}
