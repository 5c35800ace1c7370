use iced::{
    mouse,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, text, text_input, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Size, Task, Theme,
};
use spectralcore::prelude::{FilterBand, PipelineConfig};
use spectralcore::processing::folded_index;
use spectralcore::{Pipeline, PipelineReport};

const ORIGINAL_COLOR: Color = Color {
    r: 0.18,
    g: 0.72,
    b: 0.89,
    a: 1.0,
};
const FILTERED_COLOR: Color = Color {
    r: 0.95,
    g: 0.55,
    b: 0.2,
    a: 1.0,
};

// Largest signal length the form accepts; the pipeline runs on the UI thread.
const MAX_LENGTH: usize = 1 << 16;

fn main() -> iced::Result {
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Spectral Band-Pass Visualizer".into()
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    form: BandForm,
    report: Option<PipelineReport>,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    FieldChanged(Field, String),
    Apply,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Length,
    Low,
    High,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let mut state = Visualizer {
            form: BandForm::default(),
            report: None,
            status: String::new(),
        };
        state.apply();
        (state, Task::none())
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => state.form.update_field(field, value),
            Message::Apply => state.apply(),
        }
        Task::none()
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let form_column = column![
            text("Filter").size(26),
            text_input("Signal length (power of two)", &state.form.length)
                .on_input(|value| Message::FieldChanged(Field::Length, value))
                .padding(6),
            text_input("Low bin", &state.form.low)
                .on_input(|value| Message::FieldChanged(Field::Low, value))
                .padding(6),
            text_input("High bin", &state.form.high)
                .on_input(|value| Message::FieldChanged(Field::High, value))
                .padding(6),
            button("Apply").on_press(Message::Apply).padding(10),
            text(&state.status).size(14),
            column![
                text("Bins are folded: k and N - k count as the same frequency.").size(12),
                text("The test signal carries energy at bins 1 and 4 only.").size(12),
            ]
            .spacing(4)
            .padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(320.0));

        let (signals, spectrum) = match &state.report {
            Some(report) => (
                SignalPlot {
                    original: report.original.clone(),
                    filtered: report.filtered.clone(),
                },
                SpectrumPlot {
                    magnitudes: report.spectrum.iter().map(|c| c.norm()).collect(),
                    band: report.band,
                },
            ),
            None => (
                SignalPlot::default(),
                SpectrumPlot {
                    magnitudes: Vec::new(),
                    band: FilterBand::new(1, 0),
                },
            ),
        };

        let plot_column = column![
            text("Signal (blue: original, orange: filtered)").size(18),
            Canvas::new(signals)
                .width(Length::Fill)
                .height(Length::Fixed(260.0)),
            text("FFT magnitude per bin (highlighted: passband)").size(18),
            Canvas::new(spectrum)
                .width(Length::Fill)
                .height(Length::Fixed(220.0)),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        let layout = row![form_column, plot_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn apply(&mut self) {
        let config = match self.form.to_config() {
            Ok(config) => config,
            Err(message) => {
                self.status = message;
                return;
            }
        };

        match Pipeline::new(config).run() {
            Ok(report) => {
                self.status = format!(
                    "N={} band [{}, {}], residue {:.1e}",
                    report.length, report.band.low, report.band.high, report.imaginary_residue
                );
                self.report = Some(report);
            }
            Err(err) => {
                self.status = format!("Pipeline error: {err}");
            }
        }
    }
}

#[derive(Debug, Clone)]
struct BandForm {
    length: String,
    low: String,
    high: String,
}

impl Default for BandForm {
    fn default() -> Self {
        Self {
            length: "128".into(),
            low: "1".into(),
            high: "4".into(),
        }
    }
}

impl BandForm {
    fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Length => self.length = value,
            Field::Low => self.low = value,
            Field::High => self.high = value,
        }
    }

    fn to_config(&self) -> Result<PipelineConfig, String> {
        let parse = |label: &str, value: &str| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("{label} must be a non-negative integer"))
        };
        let length = parse("Length", &self.length)?;
        if length > MAX_LENGTH {
            return Err(format!("Length must be at most {MAX_LENGTH}"));
        }
        Ok(PipelineConfig {
            length,
            band: FilterBand::new(parse("Low bin", &self.low)?, parse("High bin", &self.high)?),
            cross_check: false,
            ..Default::default()
        })
    }
}

#[derive(Clone, Default)]
struct SignalPlot {
    original: Vec<f64>,
    filtered: Vec<f64>,
}

impl SignalPlot {
    fn trace(data: &[f64], min: f64, range: f64, bounds: Size) -> Path {
        let step = bounds.width / (data.len() as f32 - 1.0);
        Path::new(|builder| {
            for (i, value) in data.iter().enumerate() {
                let x = i as f32 * step;
                let normalized = ((value - min) / range) as f32;
                let y = bounds.height - normalized * bounds.height;
                if i == 0 {
                    builder.move_to(Point::new(x, y));
                } else {
                    builder.line_to(Point::new(x, y));
                }
            }
        })
    }
}

impl canvas::Program<Message> for SignalPlot {
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
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        if self.original.len() > 1 {
            let all = self.original.iter().chain(self.filtered.iter());
            let min = all.clone().cloned().fold(f64::INFINITY, f64::min);
            let max = all.cloned().fold(f64::NEG_INFINITY, f64::max);
            let range = (max - min).max(1e-9);

            frame.stroke(
                &Self::trace(&self.original, min, range, bounds.size()),
                Stroke::default().with_width(2.5).with_color(ORIGINAL_COLOR),
            );
            if self.filtered.len() == self.original.len() {
                frame.stroke(
                    &Self::trace(&self.filtered, min, range, bounds.size()),
                    Stroke::default().with_width(1.5).with_color(FILTERED_COLOR),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

#[derive(Clone)]
struct SpectrumPlot {
    magnitudes: Vec<f64>,
    band: FilterBand,
}

impl canvas::Program<Message> for SpectrumPlot {
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
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.02, 0.02, 0.04),
        );

        let n = self.magnitudes.len();
        if n > 0 {
            let peak = self.magnitudes.iter().cloned().fold(0.0, f64::max).max(1e-9);
            let bar_width = bounds.width / n as f32;
            for (k, magnitude) in self.magnitudes.iter().enumerate() {
                let height = (magnitude / peak) as f32 * (bounds.height - 4.0);
                let color = if self.band.contains(folded_index(k, n)) {
                    FILTERED_COLOR
                } else {
                    Color::from_rgb(0.35, 0.35, 0.45)
                };
                frame.fill_rectangle(
                    Point::new(k as f32 * bar_width, bounds.height - height),
                    Size::new(bar_width.max(1.0), height),
                    color,
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(length: &str, low: &str, high: &str) -> BandForm {
        BandForm {
            length: length.into(),
            low: low.into(),
            high: high.into(),
        }
    }

    #[test]
    fn form_skips_quadratic_cross_check() {
        let config = form("65536", "1", "4").to_config().unwrap();
        assert_eq!(config.length, MAX_LENGTH);
        assert!(!config.cross_check);
    }

    #[test]
    fn form_rejects_oversized_length() {
        let err = form("131072", "1", "4").to_config().unwrap_err();
        assert!(err.contains("at most"));
    }

    #[test]
    fn apply_reports_pipeline_errors_in_status() {
        let mut state = Visualizer {
            form: form("100", "1", "4"),
            report: None,
            status: String::new(),
        };
        state.apply();
        assert!(state.status.starts_with("Pipeline error"));
        assert!(state.report.is_none());

        state.form = form("64", "1", "4");
        state.apply();
        assert!(state.status.starts_with("N=64"));
        assert!(state.report.as_ref().unwrap().dft_preview.is_empty());
    }
}
