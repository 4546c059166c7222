//! Screening domains and their field specifications
//!
//! The three disease domains form a closed set. Each carries an ordered list
//! of input field labels; the order is significant because it defines the
//! positional mapping into the feature vector handed to the predictor.

/// The three supported disease-prediction domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

/// Ordered input fields for the diabetes model (8 features)
const DIABETES_FIELDS: &[&str] = &[
    "Number of Pregnancies",
    "Glucose Level",
    "Blood Pressure Value",
    "Skin Thickness Value",
    "Insulin Level",
    "BMI Value",
    "Diabetes Pedigree Function Value",
    "Age",
];

/// Ordered input fields for the heart disease model (13 features)
const HEART_DISEASE_FIELDS: &[&str] = &[
    "Age",
    "Sex",
    "Chest Pain Type",
    "Resting Blood Pressure",
    "Serum Cholesterol (mg/dl)",
    "Fasting Blood Sugar (>120 mg/dl)",
    "Resting Electrocardiographic Results",
    "Maximum Heart Rate Achieved",
    "Exercise Induced Angina",
    "ST Depression Induced by Exercise",
    "Slope of Peak Exercise ST Segment",
    "Major Vessels Colored by Fluoroscopy",
    "Thalassemia (0=Normal; 1=Fixed Defect; 2=Reversible Defect)",
];

/// Ordered input fields for the Parkinson's model (22 voice features)
const PARKINSONS_FIELDS: &[&str] = &[
    "MDVP:Fo(Hz)",
    "MDVP:Fhi(Hz)",
    "MDVP:Flo(Hz)",
    "MDVP:Jitter(%)",
    "MDVP:Jitter(Abs)",
    "MDVP:RAP",
    "MDVP:PPQ",
    "Jitter:DDP",
    "MDVP:Shimmer",
    "MDVP:Shimmer(dB)",
    "Shimmer:APQ3",
    "Shimmer:APQ5",
    "MDVP:APQ",
    "Shimmer:DDA",
    "NHR",
    "HNR",
    "RPDE",
    "DFA",
    "Spread1",
    "Spread2",
    "D2",
    "PPE",
];

impl Domain {
    /// All domains, in menu order
    pub const ALL: [Domain; 3] = [Domain::Diabetes, Domain::HeartDisease, Domain::Parkinsons];

    /// Number of domains
    pub const COUNT: usize = Self::ALL.len();

    /// Stable index of the domain within [`Domain::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Domain::Diabetes => 0,
            Domain::HeartDisease => 1,
            Domain::Parkinsons => 2,
        }
    }

    /// Human-readable domain name
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Diabetes => "Diabetes",
            Domain::HeartDisease => "Heart Disease",
            Domain::Parkinsons => "Parkinson's",
        }
    }

    /// Page title shown above the form
    pub fn title(&self) -> &'static str {
        match self {
            Domain::Diabetes => "Diabetes Prediction",
            Domain::HeartDisease => "Heart Disease Prediction",
            Domain::Parkinsons => "Parkinson's Prediction",
        }
    }

    /// Ordered field labels; position defines the feature-vector slot
    pub fn field_labels(&self) -> &'static [&'static str] {
        match self {
            Domain::Diabetes => DIABETES_FIELDS,
            Domain::HeartDisease => HEART_DISEASE_FIELDS,
            Domain::Parkinsons => PARKINSONS_FIELDS,
        }
    }

    /// Expected feature-vector length
    pub fn arity(&self) -> usize {
        self.field_labels().len()
    }

    /// Stable lowercase key used to tag artifacts and name their files
    pub fn key(&self) -> &'static str {
        match self {
            Domain::Diabetes => "diabetes",
            Domain::HeartDisease => "heart_disease",
            Domain::Parkinsons => "parkinsons",
        }
    }

    /// File name of the serialized model artifact for this domain
    pub fn artifact_file(&self) -> &'static str {
        match self {
            Domain::Diabetes => "diabetes.json",
            Domain::HeartDisease => "heart_disease.json",
            Domain::Parkinsons => "parkinsons.json",
        }
    }

    /// Fixed (positive, negative) diagnosis message pair
    pub fn diagnosis_messages(&self) -> (&'static str, &'static str) {
        match self {
            Domain::Diabetes => ("The person is diabetic", "The person is not diabetic"),
            Domain::HeartDisease => (
                "The person has heart disease",
                "The person does not have heart disease",
            ),
            Domain::Parkinsons => (
                "The person has Parkinson's disease",
                "The person does not have Parkinson's disease",
            ),
        }
    }

    /// Parse a menu selection: a 1-based index or a (lenient) domain name
    ///
    /// Accepts "1"/"2"/"3", full names, and common short forms such as
    /// "heart" or "parkinsons". Returns None for anything else.
    pub fn parse(input: &str) -> Option<Domain> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "1" | "diabetes" => Some(Domain::Diabetes),
            "2" | "heart" | "heart disease" | "heartdisease" => Some(Domain::HeartDisease),
            "3" | "parkinson" | "parkinsons" | "parkinson's" => Some(Domain::Parkinsons),
            _ => None,
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
