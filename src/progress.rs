use indicatif::{ProgressBar, ProgressStyle};

pub struct StreamProgress {
    bar: ProgressBar,
    enabled: bool,
}

impl StreamProgress {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self {
                bar: ProgressBar::hidden(),
                enabled: false,
            };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap(),
        );

        Self { bar, enabled: true }
    }

    pub fn update(&self, lines: u64, kept: usize) {
        if self.enabled {
            self.bar
                .set_message(format!("{} lines | {} kept", lines, kept));
            self.bar.tick();
        }
    }

    pub fn finish(&self) {
        if self.enabled {
            self.bar.finish_and_clear();
        }
    }
}
