//! Registry of recognized clubs.
//!
//! Results sheets are shared between regions. Only scorers of clubs in the
//! registry count towards the standings; everyone else is filtered out during
//! round aggregation.

use std::collections::BTreeSet;

/// Built-in list of recognized clubs (Limburg amateur football).
pub const RECOGNIZED_CLUBS: &[&str] = &[
    "Abdissenbosch",
    "Achates",
    "Alfa Sport",
    "America",
    "Amstenrade",
    "BEVO",
    "BMR",
    "BSV Limburgia",
    "BVV'27",
    "Baarlo",
    "Bekkerveld",
    "Belfeldia",
    "Berg'28",
    "Bieslo",
    "Blerick",
    "Boekel Sport",
    "Born",
    "Brevendia",
    "Bunde",
    "Caesar",
    "Chevremont",
    "Conventus'03",
    "DBSV",
    "DES Swalmen",
    "DESM",
    "DEV-Arcen",
    "DFO'20",
    "DVC'16",
    "DVO",
    "Daalhof",
    "De Dem",
    "De Leeuw",
    "De Ster",
    "EMS",
    "EVV",
    "Eijsden",
    "Eikenderveld",
    "Eindse Boys",
    "FC Bemelen",
    "FC Geleen Zuid",
    "FC Gulpen",
    "FC Hoensbroek",
    "FC Kerkrade-West",
    "FC Maasgouw",
    "FC ODA",
    "FC RIA",
    "FC Roerdalen",
    "FCV-Venlo",
    "FSG",
    "GSV'28",
    "Geertruidse Boys",
    "Geulsche Boys",
    "Geusselt Sport",
    "Grashoek",
    "Groene Ster",
    "H.B.S.V.",
    "Haelen",
    "Haslou",
    "Heer",
    "Hegelsom",
    "Heijen",
    "Helden",
    "Hellas",
    "Holthees-Smakt",
    "IVO",
    "IVS",
    "KSV Horn",
    "KVC Oranje",
    "Kakertse Boys",
    "Keer",
    "Koningslust",
    "Kronenberg",
    "Langeberg",
    "Leonidas-W",
    "Leunen",
    "Leveroy",
    "Lindenheuvel-Heidebloem Combinatie",
    "Linne",
    "Lottum-GFC'33",
    "MBC'13",
    "MMC Weert",
    "MSH Maasduinen",
    "MVC'19",
    "Melderslo",
    "Merefeldia",
    "Merselo",
    "Meterik",
    "Milsbeek",
    "Minor",
    "Neerbeek",
    "Oostrum",
    "PEC'20",
    "Partij",
    "Passart-VKC",
    "RIOS'31",
    "RKASV",
    "RKAVC",
    "RKDSO",
    "RKHBS",
    "RKHSV",
    "RKIVV",
    "RKMSV",
    "RKMVC",
    "RKSVB",
    "RKSVN",
    "RKSVO",
    "RKSVV",
    "RKTSV",
    "RKUVC",
    "RKVB",
    "RKVVM",
    "RVU",
    "Reuver",
    "Rimburg",
    "Roggel",
    "Rood Groen LVC'01",
    "Roosteren",
    "SCG",
    "SHH",
    "SNA",
    "SNC'14",
    "SSS'18",
    "SV Brunssum",
    "SV Geuldal",
    "SV Heythuysen",
    "SV Hulsberg",
    "SV Laar",
    "SV Meerssen",
    "SV Simpelveld",
    "SV United",
    "SV Venray",
    "SVC 2000",
    "SVEB-Sporting S.T.",
    "SVH'39",
    "SVM",
    "SVME",
    "SVOC'01",
    "Sanderbout",
    "Schaesberg",
    "Scharn",
    "Schimmert",
    "Schinveld",
    "Sittard",
    "Slekker Boys",
    "Sparta'18",
    "Spaubeek",
    "Sportclub Jekerdal",
    "Sportclub Leeuwen",
    "Sportclub Susteren",
    "Sportclub'25",
    "Sporting H.A.C.",
    "Sporting Heerlen",
    "St. Joost",
    "TSC Irene",
    "UOW'02",
    "Urmondia",
    "VV Hebes",
    "VV Kessel",
    "VV Maastricht West",
    "VV Schaesberg",
    "Vaesrade",
    "Venlosche Boys",
    "Veritas",
    "Vijlen",
    "Vitesse'08",
    "Voerendaal",
    "Walram",
    "Weltania",
    "Wijnandia",
    "Willem I",
    "Wittenhorst",
    "Woander Forest",
    "Ysselsteyn",
    "Zwart-Wit'19",
    "Zwentibold",
];

/// Allow-list of club names. Matching is exact, after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubRegistry {
    clubs: BTreeSet<String>,
}

impl Default for ClubRegistry {
    fn default() -> Self {
        Self {
            clubs: RECOGNIZED_CLUBS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ClubRegistry {
    /// An empty registry; nothing is recognized until clubs are added.
    pub fn empty() -> Self {
        Self {
            clubs: BTreeSet::new(),
        }
    }

    /// Add clubs on top of the current set. Blank names are ignored.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for club in extra {
            let club = club.as_ref().trim();
            if !club.is_empty() {
                self.clubs.insert(club.to_string());
            }
        }
        self
    }

    pub fn contains(&self, club: &str) -> bool {
        self.clubs.contains(club.trim())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.clubs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }
}
