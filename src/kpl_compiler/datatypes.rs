// Native data types of the scripting language
//
// Each enumerated type maps symbolic names to code space values and back. The
// registry is built once and is read-only afterwards; `initialize()` forces it
// up front so no lookup ever pays for construction mid-parse.

use std::fmt;

use indexmap::IndexMap;

use crate::kpl_compiler::code_space::{
    command_value, instruction, read_only, Band, InternalBand, ScriptCode,
};

/// Stable handle of a built-in type. The discriminant is the type id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer = 0,
    State = 1,
    Team = 2,
    Spell = 3,
    Follower = 4,
    Building = 5,
}

/// Namespace and band every value of a type lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueBand {
    Code(Band),
    Internal(InternalBand),
}

#[derive(Debug)]
pub struct NativeDataType {
    id: u8,
    name: &'static str,
    integer_type: bool,
    band: ValueBand,
    by_name: IndexMap<&'static str, ScriptCode>,
    by_value: IndexMap<ScriptCode, &'static str>,
    default_name: &'static str,
    default_value: ScriptCode,
}

impl NativeDataType {
    fn integer(id: u8, name: &'static str) -> Self {
        NativeDataType {
            id,
            name,
            integer_type: true,
            band: ValueBand::Code(Band::RawInteger),
            by_name: IndexMap::new(),
            by_value: IndexMap::new(),
            default_name: "",
            default_value: 0,
        }
    }

    /// Entries with an empty name are valid values without a symbolic name.
    fn enumerated(
        id: u8,
        name: &'static str,
        band: ValueBand,
        values: &[(&'static str, ScriptCode)],
        default_name: &'static str,
        default_value: ScriptCode,
    ) -> Self {
        let mut by_name = IndexMap::new();
        let mut by_value = IndexMap::new();
        for &(value_name, code) in values {
            if !value_name.is_empty() {
                by_name.insert(value_name, code);
            }
            by_value.insert(code, value_name);
        }

        NativeDataType {
            id,
            name,
            integer_type: false,
            band,
            by_name,
            by_value,
            default_name,
            default_value,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_integer_type(&self) -> bool {
        self.integer_type
    }

    pub fn band(&self) -> ValueBand {
        self.band
    }

    pub fn default_name(&self) -> &'static str {
        self.default_name
    }

    pub fn default_value(&self) -> ScriptCode {
        self.default_value
    }

    /// Symbolic names of this type, sorted
    pub fn available_values(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Every code registered for this type, named or not
    pub fn codes(&self) -> impl Iterator<Item = ScriptCode> + '_ {
        self.by_value.keys().copied()
    }

    pub fn is_valid_identifier(&self, identifier: &str) -> bool {
        self.by_name.contains_key(identifier)
    }

    pub fn is_valid_value(&self, value: ScriptCode) -> bool {
        self.by_value.contains_key(&value)
    }

    /// Symbolic name of `value`, or `""` when it has none. Check
    /// `is_valid_value` first to tell "unknown" from "unnamed".
    pub fn get_value_identifier(&self, value: ScriptCode) -> &'static str {
        self.by_value.get(&value).copied().unwrap_or("")
    }

    /// Code of `identifier`, or `0` when the name is unknown. Check
    /// `is_valid_identifier` first since `0` is also a real code.
    pub fn get_identifier_value(&self, identifier: &str) -> ScriptCode {
        self.by_name.get(identifier).copied().unwrap_or(0)
    }
}

impl PartialEq for NativeDataType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NativeDataType {}

lazy_static! {
    static ref NATIVE_TYPES: [NativeDataType; 6] = [
        NativeDataType::integer(DataType::Integer as u8, "Integer"),
        NativeDataType::enumerated(
            DataType::State as u8,
            "State",
            ValueBand::Code(Band::Instruction),
            &[("on", instruction::ON), ("off", instruction::OFF)],
            "off",
            instruction::OFF,
        ),
        NativeDataType::enumerated(
            DataType::Team as u8,
            "Team",
            ValueBand::Code(Band::CommandValue),
            &[
                ("Blue", command_value::BLUE),
                ("Red", command_value::RED),
                ("Yellow", command_value::YELLOW),
                ("Green", command_value::GREEN),
            ],
            "Blue",
            command_value::BLUE,
        ),
        NativeDataType::enumerated(
            DataType::Spell as u8,
            "Spell",
            ValueBand::Internal(InternalBand::ReadOnly),
            &[
                ("", read_only::BURN),
                ("Blast", read_only::BLAST),
                ("Lightning", read_only::LIGHTNING_BOLT),
                ("", read_only::WHIRLWIND),
                ("Swarm", read_only::INSECT_PLAGUE),
                ("Invisibility", read_only::INVISIBILITY),
                ("Hypnotism", read_only::HYPNOTISM),
                ("Firestorm", read_only::FIRESTORM),
                ("GhostArmy", read_only::GHOST_ARMY),
                ("Erosion", read_only::EROSION),
                ("Swamp", read_only::SWAMP),
                ("LandBridge", read_only::LAND_BRIDGE),
                ("AngelOfDead", read_only::ANGEL_OF_DEAD),
                ("Earthquake", read_only::EARTHQUAKE),
                ("Flatten", read_only::FLATTEN),
                ("Volcano", read_only::VOLCANO),
                ("Armageddon", read_only::WRATH_OF_GOD),
                ("Shield", read_only::SHIELD),
                ("Convert", read_only::CONVERT),
                ("Teleport", read_only::TELEPORT),
                ("Bloodlust", read_only::BLOODLUST),
                ("UndefinedSpell", read_only::NO_SPECIFIC_SPELL),
            ],
            "Blast",
            read_only::BLAST,
        ),
        NativeDataType::enumerated(
            DataType::Follower as u8,
            "Follower",
            ValueBand::Internal(InternalBand::ReadOnly),
            &[
                ("Brave", read_only::BRAVE),
                ("Warrior", read_only::WARRIOR),
                ("Religious", read_only::RELIGIOUS),
                ("Spy", read_only::SPY),
                ("Firewarrior", read_only::FIREWARRIOR),
                ("Shaman", read_only::SHAMAN),
                ("UndefinedFollower", read_only::NO_SPECIFIC_PERSON),
            ],
            "Brave",
            read_only::BRAVE,
        ),
        NativeDataType::enumerated(
            DataType::Building as u8,
            "Building",
            ValueBand::Internal(InternalBand::ReadOnly),
            &[
                ("SmallHut", read_only::SMALL_HUT),
                ("MediumHut", read_only::MEDIUM_HUT),
                ("LargeHut", read_only::LARGE_HUT),
                ("DrumTower", read_only::DRUM_TOWER),
                ("Temple", read_only::TEMPLE),
                ("SpyTrain", read_only::SPY_TRAIN),
                ("WarriorTrain", read_only::WARRIOR_TRAIN),
                ("FirewarriorTrain", read_only::FIREWARRIOR_TRAIN),
                ("", read_only::RECONVERSION),
                ("", read_only::WALL_PIECE),
                ("", read_only::GATE),
                ("BoatHut", read_only::BOAT_HUT),
                ("", read_only::BOAT_HUT2),
                ("AirshipHut", read_only::AIRSHIP_HUT),
                ("", read_only::AIRSHIP_HUT2),
                ("UndefinedBuilding", read_only::NO_SPECIFIC_BUILDING),
            ],
            "SmallHut",
            read_only::SMALL_HUT,
        ),
    ];
}

/// Build the type registry. Safe to call more than once.
pub fn initialize() {
    lazy_static::initialize(&NATIVE_TYPES);
    log::debug!("Native data types ready: {} types", NATIVE_TYPES.len());
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::Integer,
        DataType::State,
        DataType::Team,
        DataType::Spell,
        DataType::Follower,
        DataType::Building,
    ];

    pub fn native(self) -> &'static NativeDataType {
        &NATIVE_TYPES[self as usize]
    }

    pub fn from_id(id: u8) -> Option<DataType> {
        DataType::ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        self.native().name()
    }

    /// The enumerated type that registers `code`, if any. Enumerated types
    /// never share a code, so the answer is unique.
    pub fn find_type_from_value(code: ScriptCode) -> Option<DataType> {
        DataType::ALL
            .iter()
            .copied()
            .find(|dt| dt.native().is_valid_value(code))
    }

    /// The enumerated type that owns the symbolic name `name`, if any.
    pub fn find_type_from_value_name(name: &str) -> Option<DataType> {
        DataType::ALL
            .iter()
            .copied()
            .find(|dt| dt.native().is_valid_identifier(name))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
#[path = "datatypes_tests.rs"]
mod tests;
