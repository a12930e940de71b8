use crate::core::{Error, Sample};

/// Where poll outcomes go. The monitor reports every tick through this seam,
/// so tests can capture emission order without touching the console.
pub trait Report {
    fn sample(&mut self, sample: &Sample);
    fn failure(&mut self, error: &Error);
}

/// Line-oriented console output: one stdout line per reading, one stderr line
/// per failed poll.
pub struct Console;

impl Report for Console {
    fn sample(&mut self, sample: &Sample) {
        println!("Leitura ADC: {} | Tensao (V): {}", sample.raw, sample.volts);
    }

    fn failure(&mut self, error: &Error) {
        match error {
            Error::Open { path, .. } => {
                eprintln!("Erro: não consegui abrir {}", path.display());
            }
            other => eprintln!("Erro: {other}"),
        }
    }
}

/// Records outcomes in call order. The emulated counterpart of [`Console`].
#[derive(Debug, Default)]
pub struct Memory {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Sample(Sample),
    Failure(String),
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.events.iter().filter_map(|event| match event {
            Event::Sample(sample) => Some(sample),
            Event::Failure(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            Event::Failure(message) => Some(message.as_str()),
            Event::Sample(_) => None,
        })
    }
}

impl Report for Memory {
    fn sample(&mut self, sample: &Sample) {
        self.events.push(Event::Sample(*sample));
    }

    fn failure(&mut self, error: &Error) {
        self.events.push(Event::Failure(error.to_string()));
    }
}
