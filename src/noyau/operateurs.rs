// src/noyau/operateurs.rs
//
// Table des opérateurs (précédence + associativité) par mode de calcul.
// Table constante, indexée par Op : pas de HashMap, pas d’état global.

/// Opérateurs binaires reconnus. Aucun autre symbole n’est un opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    StarStar, // **
}

impl Op {
    pub const ALL: [Op; 5] = [Op::Plus, Op::Minus, Op::Star, Op::Slash, Op::StarStar];

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::StarStar => "**",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.symbol() == s)
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Descripteur d’opérateur : précédence (>= 1, plus haut = lie plus fort) + associativité.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub precedence: u8,
    pub associativity: Associativity,
}

impl Descriptor {
    const fn new(precedence: u8, associativity: Associativity) -> Self {
        Self {
            precedence,
            associativity,
        }
    }
}

/// Mode de calcul : ne choisit QUE la table des opérateurs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Scientific,
    Accounting,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Scientific, Mode::Accounting];

    /// Sélection par numéro de menu : 1 = Scientific, 2 = Accounting.
    /// Tout autre numéro retombe sur Scientific.
    pub fn from_selection(n: u32) -> Mode {
        match n {
            2 => Mode::Accounting,
            _ => Mode::Scientific,
        }
    }

    pub fn selection(self) -> u32 {
        match self {
            Mode::Scientific => 1,
            Mode::Accounting => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Scientific => "Scientific",
            Mode::Accounting => "Accounting",
        }
    }
}

/// Table dense : un descripteur par Op (ordre de Op::ALL).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorTable {
    entries: [Descriptor; 5],
}

const TABLE_SCIENTIFIQUE: OperatorTable = OperatorTable {
    entries: [
        Descriptor::new(2, Associativity::Left),  // +
        Descriptor::new(2, Associativity::Left),  // -
        Descriptor::new(3, Associativity::Left),  // *
        Descriptor::new(3, Associativity::Left),  // /
        Descriptor::new(4, Associativity::Right), // **
    ],
};

impl OperatorTable {
    pub fn descriptor(&self, op: Op) -> Descriptor {
        self.entries[op.index()]
    }

    pub fn precedence(&self, op: Op) -> u8 {
        self.descriptor(op).precedence
    }

    pub fn is_left_associative(&self, op: Op) -> bool {
        self.descriptor(op).associativity == Associativity::Left
    }
}

/// Table des opérateurs pour un mode.
///
/// Accounting reprend la table Scientific (variante branchée sur l’évaluateur postfixe).
pub fn operator_table(mode: Mode) -> OperatorTable {
    match mode {
        Mode::Scientific | Mode::Accounting => TABLE_SCIENTIFIQUE,
    }
}
