use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{
    executor, theme, Alignment, Application, Color, Command, Element, Length, Point, Rectangle,
    Renderer, Settings, Theme,
};

use crate::actions::{self, notice, Dispatcher, LoggingNotifier, Registrar};
use crate::core::data::Metric;
use crate::core::roster::Roster;
use crate::models::vitals::VitalsSeries;
use crate::state::{reduce, Action, DashboardState};
use crate::ui::components::{self, Panel, APP_NAME};

const CHART_HEIGHT: f32 = 200.0;
const ATTENTION: Color = Color::from_rgb(0.92, 0.70, 0.03);

#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(Action),
    EmergencyCall,
    AmbulanceCall,
    SosAlert,
    AddPatient,
    DismissNotice,
}

pub struct Flags {
    pub roster: Roster,
    pub sidebar_visible: bool,
}

pub struct DashboardApp {
    roster: Roster,
    state: DashboardState,
    notifier: LoggingNotifier,
    notice: Option<String>,
}

/// Open the dashboard window and block until it is closed.
pub fn run(roster: Roster, sidebar_visible: bool) -> iced::Result {
    DashboardApp::run(Settings::with_flags(Flags { roster, sidebar_visible }))
}

impl Application for DashboardApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Flags;

    fn new(flags: Self::Flags) -> (Self, Command<Self::Message>) {
        let state = DashboardState::initial(&flags.roster).with_sidebar(flags.sidebar_visible);
        (
            Self {
                roster: flags.roster,
                state,
                notifier: LoggingNotifier,
                notice: None,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        let header = components::header_title(self.state.selected_patient(&self.roster));
        format!("{APP_NAME} - {header}")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::Dashboard(action) => {
                self.state = reduce(&self.state, action, &self.roster);
            }
            Message::EmergencyCall => {
                if let Some(shown) = actions::emergency_call(&self.state, &self.roster, &self.notifier) {
                    self.notice = Some(shown);
                }
            }
            Message::AmbulanceCall => {
                self.notice = Some(notice(self.notifier.ambulance_call()));
            }
            Message::SosAlert => {
                if let Some(shown) = actions::sos_alert(&self.state, &self.roster, &self.notifier) {
                    self.notice = Some(shown);
                }
            }
            Message::AddPatient => {
                self.notice = Some(notice(self.notifier.open_registration()));
            }
            Message::DismissNotice => self.notice = None,
        }
        Command::none()
    }

    fn view(&self) -> Element<Self::Message> {
        let mut main = Column::new().spacing(20).padding(20);
        main = main.push(self.view_header());
        if let Some(notice) = &self.notice {
            main = main.push(
                row![
                    text(notice).size(16),
                    Space::with_width(Length::Fill),
                    button("Dismiss").on_press(Message::DismissNotice),
                ]
                .align_items(Alignment::Center),
            );
        }
        main = main.push(self.view_detail());

        let content: Element<Message> = if self.state.sidebar_visible {
            row![self.view_sidebar(), scrollable(main).width(Length::Fill)].into()
        } else {
            scrollable(main).width(Length::Fill).into()
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl DashboardApp {
    fn view_sidebar(&self) -> Element<Message> {
        let entries: Vec<Element<Message>> = components::sidebar_entries(&self.state, &self.roster)
            .into_iter()
            .map(|entry| {
                let mut name = row![text(&entry.name).size(16)].spacing(8);
                if entry.attention {
                    name = name.push(text("(!)").size(16).style(ATTENTION));
                }
                let style = if entry.selected {
                    theme::Button::Primary
                } else {
                    theme::Button::Text
                };
                button(column![name, text(&entry.condition).size(12)].spacing(4))
                    .width(Length::Fill)
                    .style(style)
                    .on_press(Message::Dashboard(Action::SelectPatient(entry.id)))
                    .into()
            })
            .collect();

        let sidebar = column![
            row![
                text(APP_NAME).size(24),
                Space::with_width(Length::Fill),
                button(">").on_press(Message::Dashboard(Action::HideSidebar)),
            ]
            .align_items(Alignment::Center),
            text_input("Search patients...", &self.state.search_term)
                .on_input(|term| Message::Dashboard(Action::Search(term))),
            button("+ Add New Patient")
                .width(Length::Fill)
                .on_press(Message::AddPatient),
            Column::with_children(entries).spacing(6),
        ]
        .spacing(16)
        .padding(16)
        .width(Length::Fixed(320.0));

        scrollable(sidebar).into()
    }

    fn view_header(&self) -> Element<Message> {
        let selected = self.state.selected_patient(&self.roster);
        let mut header = row![].spacing(16).align_items(Alignment::Center);
        if !self.state.sidebar_visible {
            header = header.push(button("<").on_press(Message::Dashboard(Action::ShowSidebar)));
        }
        header = header
            .push(text(components::header_title(selected)).size(22))
            .push(Space::with_width(Length::Fill));

        let mut emergency = button("Emergency Call").style(theme::Button::Destructive);
        let mut sos = button("SOS Alert").style(theme::Button::Secondary);
        if selected.is_some() {
            emergency = emergency.on_press(Message::EmergencyCall);
            sos = sos.on_press(Message::SosAlert);
        }
        header
            .push(emergency)
            .push(button("Call Ambulance").on_press(Message::AmbulanceCall))
            .push(sos)
            .into()
    }

    fn view_detail(&self) -> Element<Message> {
        let Some(patient) = self.state.selected_patient(&self.roster) else {
            return text("No patient selected").size(18).into();
        };

        let panels: Vec<Element<Message>> = components::detail_panels(patient)
            .into_iter()
            .map(view_panel)
            .collect();

        let charts: Vec<Element<Message>> = Metric::ALL
            .into_iter()
            .map(|metric| view_chart(metric, &patient.data))
            .collect();

        row![
            Column::with_children(panels).spacing(20).width(Length::FillPortion(1)),
            Column::with_children(charts).spacing(20).width(Length::FillPortion(2)),
        ]
        .spacing(24)
        .into()
    }
}

fn view_panel<'a>(panel: Panel) -> Element<'a, Message> {
    let mut body = Column::new().spacing(8).push(text(panel.title).size(20));
    for (label, value) in panel.rows {
        body = body.push(row![text(label), Space::with_width(Length::Fill), text(value)]);
    }
    if !panel.tags.is_empty() {
        body = body.push(text("Symptoms:"));
        let tags = panel
            .tags
            .into_iter()
            .fold(row![].spacing(8), |tags, tag| tags.push(text(tag).size(14)));
        body = body.push(tags);
    }
    if let Some(note) = panel.note {
        body = body.push(text(note).size(12));
    }
    container(body).padding(16).width(Length::Fill).into()
}

fn view_chart<'a>(metric: Metric, series: &VitalsSeries) -> Element<'a, Message> {
    let chart = VitalsChart {
        metric,
        values: metric.values(series),
        labels: series.iter().map(|s| s.time.clone()).collect(),
    };
    column![
        text(metric.title()).size(20),
        Canvas::new(chart)
            .width(Length::Fill)
            .height(Length::Fixed(CHART_HEIGHT)),
    ]
    .spacing(8)
    .into()
}

/// Line chart of one metric over the day, drawn on a fixed y domain.
struct VitalsChart {
    metric: Metric,
    values: Vec<f64>,
    labels: Vec<String>,
}

impl VitalsChart {
    const LEFT: f32 = 36.0;
    const BOTTOM: f32 = 20.0;
    const GRID_LINES: usize = 4;
}

impl canvas::Program<Message> for VitalsChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = bounds.width - Self::LEFT;
        let height = bounds.height - Self::BOTTOM;
        let (lo, hi) = self.metric.domain();
        let grid = Color::from_rgb8(0xe5, 0xe7, 0xeb);
        let muted = Color::from_rgb8(0x6b, 0x72, 0x80);

        for i in 0..=Self::GRID_LINES {
            let fraction = i as f32 / Self::GRID_LINES as f32;
            let y = height * (1.0 - fraction);
            frame.stroke(
                &Path::line(Point::new(Self::LEFT, y), Point::new(bounds.width, y)),
                Stroke::default().with_color(grid).with_width(1.0),
            );
            let value = lo + (hi - lo) * f64::from(fraction);
            frame.fill_text(canvas::Text {
                content: format!("{value:.0}"),
                position: Point::new(2.0, y - 6.0),
                color: muted,
                size: 12.0.into(),
                ..canvas::Text::default()
            });
        }

        let step = width / self.values.len().max(1) as f32;
        let points: Vec<Point> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = Self::LEFT + step * (i as f32 + 0.5);
                let y = height * (1.0 - self.metric.normalize(v) as f32);
                Point::new(x, y)
            })
            .collect();

        let [r, g, b] = self.metric.color();
        let line = Color::from_rgb8(r, g, b);
        if let Some((first, rest)) = points.split_first() {
            let polyline = Path::new(|builder| {
                builder.move_to(*first);
                for point in rest {
                    builder.line_to(*point);
                }
            });
            frame.stroke(&polyline, Stroke::default().with_color(line).with_width(2.0));
        }
        for (point, label) in points.iter().zip(&self.labels) {
            frame.fill(&Path::circle(*point, 4.0), line);
            frame.fill_text(canvas::Text {
                content: label.clone(),
                position: Point::new(point.x - 16.0, height + 4.0),
                color: muted,
                size: 12.0.into(),
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
