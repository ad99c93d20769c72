use itertools::Itertools;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
/// A single normal mode, as reported by a frequency calculation.
pub struct Vibration {
    /// Wavenumber, in cm⁻¹.
    pub frequency: f64,
    pub ir_intensity: f64,
    pub raman_activity: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// Which intensity column of a [`Vibration`] is plotted.
pub enum RadiationKind {
    #[default]
    Infrared,
    Raman,
}

#[derive(Clone, PartialEq, Debug, Default)]
/// The normal modes of a molecule, sorted by frequency.
pub struct Vibrations(Vec<Vibration>);

impl RadiationKind {
    pub const ALL: [RadiationKind; 2] = [Self::Infrared, Self::Raman];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Infrared => "Infrared",
            Self::Raman => "Raman",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Infrared => "Infrared spectrum",
            Self::Raman => "Raman activities",
        }
    }

    #[must_use]
    pub fn intensity(self, vibration: &Vibration) -> f64 {
        match self {
            Self::Infrared => vibration.ir_intensity,
            Self::Raman => vibration.raman_activity,
        }
    }
}

impl FromIterator<Vibration> for Vibrations {
    fn from_iter<T: IntoIterator<Item = Vibration>>(iter: T) -> Self {
        let mut modes = iter.into_iter().collect_vec();
        modes.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
        Self(modes)
    }
}

impl Vibrations {
    /// Iterate over the modes in order of increasing frequency.
    pub fn modes(&self) -> impl Iterator<Item = &Vibration> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    /// Frequencies and the intensity column selected by `radiation`, as parallel vectors.
    pub fn columns(&self, radiation: RadiationKind) -> (Vec<f64>, Vec<f64>) {
        self.modes()
            .map(|v| (v.frequency, radiation.intensity(v)))
            .unzip()
    }
}
