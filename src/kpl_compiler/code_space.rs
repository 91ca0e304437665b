//! Code space constants for the script engine
//!
//! Every value in a compiled script's code stream is a 16-bit `ScriptCode`. The
//! value domain is partitioned into bands, and a code is classified purely by
//! which band it falls into:
//!
//! - **Raw integers** `[0, 999]`: literal constants and field references
//! - **Instruction tokens** `[1000, 1026]`: control flow, comparisons, connectives
//! - **Command block** `[1027, 1223]`: command tokens and command-value tokens,
//!   interleaved at distinct offsets
//!
//! Internal attributes and read-only internals are *field values*, not code
//! stream tokens. They live in their own namespace (see [`classify_internal`]):
//! a short prefix of direct counters stored as raw numbers, then the tunable
//! attributes at `INT_OFFSET`, then the read-only block right after them.
//!
//! # CRITICAL CONVENTION
//!
//! The offsets below are a wire-format contract with the game engine. Never
//! renumber an entry, never reuse a gap.

use std::ops::RangeInclusive;

pub type ScriptCode = u16;

pub const TOKEN_OFFSET: ScriptCode = 1000;
pub const NO_COMMANDS: ScriptCode = 27;
pub const INT_OFFSET: ScriptCode = 1000;

/// Highest code that is a raw integer rather than a token
pub const RAW_INTEGER_MAX: ScriptCode = TOKEN_OFFSET - 1;

/// Number of offsets reserved in the command block (highest assigned offset is 196)
pub const COMMAND_BLOCK_LEN: ScriptCode = 197;

/// Number of read-only internals stored as raw numbers
pub const DIRECT_COUNT: ScriptCode = 15;

/// Number of tunable internal attributes starting at `INT_OFFSET`
pub const ATTRIBUTE_COUNT: ScriptCode = 48;

const fn token(code: ScriptCode) -> ScriptCode {
    TOKEN_OFFSET + code
}

const fn command(code: ScriptCode) -> ScriptCode {
    TOKEN_OFFSET + NO_COMMANDS + code
}

const fn internal(code: ScriptCode) -> ScriptCode {
    INT_OFFSET + code
}

const fn direct(code: ScriptCode) -> ScriptCode {
    code
}

/// Declares one code family: a constant per entry plus a `(name, code)` table
/// in declaration order.
macro_rules! code_table {
    ($table:ident; $($name:ident = $value:expr,)*) => {
        $(pub const $name: super::ScriptCode = $value;)*

        pub const $table: &[(&str, super::ScriptCode)] = &[$((stringify!($name), $name),)*];
    };
}

/// Control-flow and expression tokens (offset 18 is unassigned)
pub mod instruction {
    use super::token;

    code_table! {
        ALL;
        IF = token(0),
        ELSE = token(1),
        ENDIF = token(2),
        BEGIN = token(3),
        END = token(4),
        EVERY = token(5),
        DO = token(6),
        SET = token(7),
        INCREMENT = token(8),
        DECREMENT = token(9),
        EXP_START = token(10),
        EXP_END = token(11),
        GREATER_THAN = token(12),
        LESS_THAN = token(13),
        EQUAL_TO = token(14),
        NOT_EQUAL_TO = token(15),
        GREATER_THAN_EQUAL_TO = token(16),
        LESS_THAN_EQUAL_TO = token(17),
        SCRIPT_END = token(19),
        AND = token(20),
        OR = token(21),
        ON = token(22),
        OFF = token(23),
        COMPUTER_PLAYER = token(24),
        MULTIPLY = token(25),
        DIVIDE = token(26),
    }
}

/// Values passed as command arguments (attack and guard modes, team colours)
pub mod command_value {
    use super::command;

    code_table! {
        ALL;
        COUNT_WILD = command(31),
        ATTACK_MARKER = command(43),
        ATTACK_BUILDING = command(44),
        ATTACK_PERSON = command(45),
        ATTACK_NORMAL = command(51),
        ATTACK_BY_BOAT = command(52),
        ATTACK_BY_BALLON = command(53),
        GUARD_NORMAL = command(60),
        GUARD_WITH_GHOSTS = command(61),
        BLUE = command(91),
        RED = command(92),
        YELLOW = command(93),
        GREEN = command(94),
    }
}

/// Command tokens, sharing the command block with [`command_value`]
pub mod command {
    use super::command;

    code_table! {
        ALL;
        CONSTRUCT_BUILDING = command(1),
        FETCH_WOOD = command(2),
        SHAMAN_GET_WILDS = command(3),
        HOUSE_A_PERSON = command(4),
        SEND_GHOSTS = command(5),
        BRING_NEW_PEOPLE_BACK = command(6),
        TRAIN_PEOPLE = command(7),
        POPULATE_DRUM_TOWER = command(8),
        DEFEND = command(9),
        DEFEND_BASE = command(10),
        SPELL_DEFENSE = command(11),
        PREACH = command(12),
        BUILD_WALLS = command(13),
        SABOTAGE = command(14),
        SPELL_OFFENSIVE = command(15),
        FIREWARRIOR_DEFEND = command(16),
        BUILD_VEHICLE = command(17),
        FETCH_LOST_PEOPLE = command(18),
        FETCH_LOST_VEHICLE = command(19),
        FETCH_FAR_VEHICLE = command(20),
        AUTO_ATTACK = command(21),
        SHAMAN_DEFEND = command(22),
        FLATTEN_BASE = command(23),
        BUILD_OUTER_DEFENCES = command(24),
        SPARE5 = command(25),
        SPARE6 = command(26),
        SPARE7 = command(27),
        SPARE8 = command(28),
        SPARE9 = command(29),
        SPARE10 = command(30),
        ATTACK = command(32),
        ATTACK_BLUE = command(33),
        ATTACK_RED = command(34),
        ATTACK_YELLOW = command(35),
        ATTACK_GREEN = command(36),
        SPELL_ATTACK = command(37),
        RESET_BASE_MARKER = command(38),
        SET_BASE_MARKER = command(39),
        SET_BASE_RADIUS = command(40),
        COUNT_PEOPLE_IN_MARKER = command(41),
        SET_DRUM_TOWER_POS = command(42),
        CONVERT_AT_MARKER = command(46),
        PREACH_AT_MARKER = command(47),
        SEND_GHOST_PEOPLE = command(48),
        GET_SPELLS_CAST = command(49),
        GET_NUM_ONE_OFF_SPELLS = command(50),
        SET_ATTACK_VARIABLE = command(54),
        BUILD_DRUM_TOWER = command(55),
        GUARD_AT_MARKER = command(56),
        GUARD_BETWEEN_MARKERS = command(57),
        GET_HEIGHT_AT_POS = command(58),
        SEND_ALL_PEOPLE_TO_MARKER = command(59),
        RESET_CONVERT_MARKER = command(62),
        SET_CONVERT_MARKER = command(63),
        SET_MARKER_ENTRY = command(64),
        MARKER_ENTRIES = command(65),
        CLEAR_GUARDING_FROM = command(66),
        SET_BUILDING_DIRECTION = command(67),
        TRAIN_PEOPLE_NOW = command(68),
        PRAY_AT_HEAD = command(69),
        PUT_PERSON_IN_DT = command(70),
        I_HAVE_ONE_SHOT = command(71),
        SPELL_TYPE = command(72),
        BUILDING_TYPE = command(73),
        BOAT_PATROL = command(74),
        DEFEND_SHAMEN = command(75),
        SEND_SHAMEN_DEFENDERS_HOME = command(76),
        BOAT_TYPE = command(77),
        BALLON_TYPE = command(78),
        IS_BUILDING_NEAR = command(79),
        BUILD_AT = command(80),
        SET_SPELL_ENTRY = command(81),
        DELAY_MAIN_DRUM_TOWER = command(82),
        BUILD_MAIN_DRUM_TOWER = command(83),
        ZOOM_TO = command(84),
        DISABLE_USER_INPUTS = command(85),
        ENABLE_USER_INPUTS = command(86),
        OPEN_DIALOG = command(87),
        GIVE_ONE_SHOT = command(88),
        CLEAR_STANDING_PEOPLE = command(89),
        ONLY_STAND_AT_MARKERS = command(90),
        NAV_CHECK = command(95),
        TARGET_S_WARRIORS = command(96),
        DONT_TARGET_S_WARRIORS = command(97),
        TARGET_BLUE_SHAMAN = command(98),
        DONT_TARGET_BLUE_SHAMAN = command(99),
        TARGET_BLUE_DRUM_TOWERS = command(100),
        DONT_TARGET_BLUE_DRUM_TOWERS = command(101),
        HAS_BLUE_KILLED_A_GHOST = command(102),
        COUNT_GUARD_FIRES = command(103),
        GET_HEAD_TRIGGER_COUNT = command(104),
        MOVE_SHAMAN_TO_MARKER = command(105),
        TRACK_SHAMAN_TO_ANGLE = command(106),
        TRACK_SHAMAN_EXTRA_BOLLOCKS = command(107),
        IS_SHAMAN_AVAILABLE_FOR_ATTACK = command(108),
        PARTIAL_BUILDING_COUNT = command(109),
        SEND_BLUE_PEOPLE_TO_MARKER = command(110),
        GIVE_MANA_TO_PLAYER = command(111),
        IS_PLAYER_IN_WORLD_VIEW = command(112),
        SET_AUTO_BUILD = command(113),
        DESELECT_ALL_BLUE_PEOPLE = command(114),
        FLASH_BUTTON = command(115),
        TURN_PANEL_ON = command(116),
        GIVE_PLAYER_SPELL = command(117),
        HAS_PLAYER_BEEN_IN_ENCYC = command(118),
        IS_BLUE_SHAMAN_SELECTED = command(119),
        CLEAR_SHAMAN_LEFT_CLICK = command(120),
        CLEAR_SHAMAN_RIGHT_CLICK = command(121),
        IS_SHAMAN_ICON_LEFT_CLICKED = command(122),
        IS_SHAMAN_ICON_RIGHT_CLICKED = command(123),
        TRIGGER_THING = command(124),
        TRACK_TO_MARKER = command(125),
        CAMERA_ROTATION = command(126),
        STOP_CAMERA_ROTATION = command(127),
        COUNT_BLUE_SHAPES = command(128),
        COUNT_BLUE_IN_HOUSES = command(129),
        HAS_HOUSE_INFO_BEEN_SHOWN = command(130),
        CLEAR_HOUSE_INFO_FLAG = command(131),
        SET_AUTO_HOUSE = command(132),
        COUNT_BLUE_WITH_BUILD_COMMAND = command(133),
        DONT_HOUSE_SPECIALISTS = command(134),
        TARGET_PLAYER_DT_AND_S = command(135),
        REMOVE_PLAYER_THING = command(136),
        SET_REINCARNATION = command(137),
        EXTRA_WOOD_COLLECTION = command(138),
        SET_WOOD_COLLECTION_RADII = command(139),
        GET_NUM_PEOPLE_CONVERTED = command(140),
        GET_NUM_PEOPLE_BEING_PREACHED = command(141),
        TRIGGER_LEVEL_LOST = command(142),
        TRIGGER_LEVEL_WIN = command(143),
        REMOVE_HEAD_AT_POS = command(144),
        SET_BUCKET_USAGE = command(145),
        SET_BUCKET_COUNT_FOR_SPELL = command(146),
        CREATE_MSG_NARRATIVE = command(147),
        CREATE_MSG_OBJECTIVE = command(148),
        CREATE_MSG_INFORMATION = command(149),
        CREATE_MSG_INFORMATION_ZOOM = command(150),
        SET_MSG_ZOOM = command(151),
        SET_MSG_TIMEOUT = command(152),
        SET_MSG_DELETE_ON_OK = command(153),
        SET_MSG_RETURN_ON_OK = command(154),
        SET_MSG_DELETE_ON_RMB_ZOOM = command(155),
        SET_MSG_OPEN_DLG_ON_RMB_ZOOM = command(156),
        SET_MSG_CREATE_RETURN_MSG_ON_RMB_ZOOM = command(157),
        SET_MSG_OPEN_DLG_ON_RMB_DELETE = command(158),
        SET_MSG_ZOOM_ON_LMB_OPEN_DLG = command(159),
        SET_MSG_AUTO_OPEN_DLG = command(160),
        SET_SPECIAL_NO_BLDG_PANEL = command(161),
        SET_MSG_OK_SAVE_EXIT_DLG = command(162),
        FIX_WILD_IN_AREA = command(163),
        CHECK_IF_PERSON_PREACHED_TO = command(164),
        COUNT_ANGELS = command(165),
        SET_NO_BLUE_REINC = command(166),
        IS_SHAMAN_IN_AREA = command(167),
        FORCE_TOOLTIP = command(168),
        SET_DEFENSE_RADIUS = command(169),
        MARVELLOUS_HOUSE_DEATH = command(170),
        CALL_TO_ARMS = command(171),
        DELETE_SMOKE_STUFF = command(172),
        SET_TIMER_GOING = command(173),
        REMOVE_TIMER = command(174),
        HAS_TIMER_REACHED_ZERO = command(175),
        START_REINC_NOW = command(176),
        TURN_PUSH = command(177),
        FLYBY_CREATE_NOW = command(178),
        FLYBY_START = command(179),
        FLYBY_STOP = command(180),
        FLYBY_ALLOW_INTERRUPT = command(181),
        FLYBY_SET_EVENT_POS = command(182),
        FLYBY_SET_EVENT_ANGLE = command(183),
        FLYBY_SET_EVENT_ZOOM = command(184),
        FLYBY_SET_EVENT_INT_POINT = command(185),
        FLYBY_SET_EVENT_TOOLTIP = command(186),
        FLYBY_SET_END_TARGET = command(187),
        FLYBY_SET_MESSAGE = command(188),
        KILL_TEAM_IN_AREA = command(189),
        CLEAR_ALL_MSG = command(190),
        SET_MSG_ID = command(191),
        GET_MSG_ID = command(192),
        KILL_ALL_MSG_ID = command(193),
        GIVE_UP_AND_SULK = command(194),
        AUTO_MESSAGES = command(195),
        IS_PRISION_ON_LEVEL = command(196),
    }
}

/// Tunable AI attributes, written through field slots
pub mod attribute {
    use super::internal;

    code_table! {
        ALL;
        EXPANSION = internal(0),
        PREF_SPY_TRAINS = internal(1),
        PREF_RELIGIOUS_TRAINS = internal(2),
        PREF_WARRIOR_TRAINS = internal(3),
        PREF_FIREWARRIOR_TRAINS = internal(4),
        PREF_SPY_PEOPLE = internal(5),
        PREF_RELIGIOUS_PEOPLE = internal(6),
        PREF_WARRIOR_PEOPLE = internal(7),
        PREF_FIREWARIOR_PEOPLE = internal(8),
        MAX_BUILDINGS_ON_GO = internal(9),
        HOUSE_PERCENTAGE = internal(10),
        AWAY_BRAVE = internal(11),
        AWAY_WARRIOR = internal(12),
        AWAY_RELIGIOUS = internal(13),
        DEFENSE_RAD_INCR = internal(14),
        MAX_DEFENSIVE_ACTIONS = internal(15),
        AWAY_SPY = internal(16),
        AWAY_FIREWARRIOR = internal(17),
        ATTACK_PERCENTAGE = internal(18),
        AWAY_SHAMAN = internal(19),
        PEOPLE_PER_BOAT = internal(20),
        PEOPLE_PER_BALLON = internal(21),
        DONT_USE_BOATS = internal(22),
        MAX_SPY_ATTACKS = internal(23),
        ENEMY_SPY_MAX_STAND = internal(24),
        MAX_ATTACKS = internal(25),
        EMPTY_AT_WAYPOINT = internal(26),
        SPY_CHECK_FREQUENCY = internal(27),
        RETREAT_VALUE = internal(28),
        BASE_UNDER_ATTACK_RETREAT = internal(29),
        RANDOM_BUILD_SIDE = internal(30),
        USE_PREACHER_FOR_DEFENSE = internal(31),
        SHAMEN_BLAST = internal(32),
        MAX_TRAIN_AT_ONCE = internal(33),
        GROUP_OPTION = internal(34),
        PREF_BOAT_HUTS = internal(35),
        PREF_BALLON_HUTS = internal(36),
        PREF_BOAT_DRIVERS = internal(37),
        PREF_BALLON_DRIVERS = internal(38),
        FIGHT_STOP_DISTANCE = internal(39),
        SPY_DISCOVER_CHANCE = internal(40),
        COUNT_PREACH_DAMAGE = internal(41),
        DONT_GROUP_AT_DT = internal(42),
        SPELL_DELAY = internal(43),
        DONT_DELETE_USELESS_BOAT_HOUSE = internal(44),
        BOAT_HOUSE_BROKEN = internal(45),
        DONT_AUTO_TRAIN_PREACHERS = internal(46),
        SPARE_6 = internal(47),
    }
}

/// Read-only engine state: direct counters, then the block after the attributes
pub mod read_only {
    use super::{direct, internal};

    code_table! {
        ALL;
        GAME_TURN = direct(0),
        MY_NUM_PEOPLE = direct(1),
        BLUE_PEOPLE = direct(2),
        RED_PEOPLE = direct(3),
        YELLOW_PEOPLE = direct(4),
        GREEN_PEOPLE = direct(5),
        MY_NUM_KILLED_BY_HUMAN = direct(6),
        RED_RED_KILLED_BY_HUMAN = direct(7),
        RED_YELLOW_KILLED_BY_HUMAN = direct(8),
        RED_GREEN_KILLED_BY_HUMAN = direct(9),
        RED_WILD_PEOPLE = direct(10),
        BLUE_MANA = direct(11),
        RED_MANA = direct(12),
        YELLOW_MANA = direct(13),
        GREEN_MANA = direct(14),
        MY_MANA = internal(48),
        MY_SPELL_BURN_COST = internal(49),
        MY_SPELL_BLAST_COST = internal(50),
        MY_SPELL_LIGHTNING = internal(51),
        MY_SPELL_WHIRLMIND_COST = internal(52),
        MY_SPELL_INSECT_PLAGUE_COST = internal(53),
        MY_SPELL_INVISIBILITY_COST = internal(54),
        MY_SPELL_HYPNOTISM_COST = internal(55),
        MY_SPELL_FIRESTORM_COST = internal(56),
        MY_SPELL_GHOST_ARMY_COST = internal(57),
        MY_SPELL_EROSION_COST = internal(58),
        MY_SPELL_SWAMP_COST = internal(59),
        MY_SPELL_LAND_BRIDGE_COST = internal(60),
        MY_SPELL_ANGEL_OF_DEAD_COST = internal(61),
        MY_SPELL_EARTHQUAKE_COST = internal(62),
        MY_SPELL_FLATTEN_COST = internal(63),
        MY_SPELL_VOLCANO_COST = internal(64),
        MY_SPELL_WRATH_OF_GOD_COST = internal(65),
        MY_BUILDING_SMALL_HUT = internal(66),
        MY_BUILDING_MEDIUM_HUT = internal(67),
        MY_BUILDING_LARGE_HUT = internal(68),
        MY_BUILDING_DRUM_TOWER = internal(69),
        MY_BUILDING_TEMPLE = internal(70),
        MY_BUILDING_SPY_TRAIN = internal(71),
        MY_BUILDING_WARRIOR_TRAIN = internal(72),
        MY_BUILDING_FIREWARRIOR_TRAIN = internal(73),
        MY_BUILDING_RECONVERSION = internal(74),
        MY_BUILDING_WALL_PIECE = internal(75),
        MY_BUILDING_GATE = internal(76),
        MY_BUILDING_CURR_OE_SLOT = internal(77),
        MY_BUILDING_BOAT_HUT = internal(78),
        MY_BUILDING_BOAT_HUT2 = internal(79),
        MY_BUILDING_AIRSHIP_HUT = internal(80),
        MY_BUILDING_AIRSHIP_HUT2 = internal(81),
        BLUE_BUILDING_SMALL_HUT = internal(82),
        BLUE_BUILDING_MEDIUM_HUT = internal(83),
        BLUE_BUILDING_LARGE_HUT = internal(84),
        BLUE_BUILDING_DRUM_TOWER = internal(85),
        BLUE_BUILDING_TEMPLE = internal(86),
        BLUE_BUILDING_SPY_TRAIN = internal(87),
        BLUE_BUILDING_WARRIOR_TRAIN = internal(88),
        BLUE_BUILDING_FIREWARRIOR_TRAIN = internal(89),
        BLUE_BUILDING_RECONVERSION = internal(90),
        BLUE_BUILDING_WALL_PIECE = internal(91),
        BLUE_BUILDING_GATE = internal(92),
        BLUE_BUILDING_CURR_OE_SLOT = internal(93),
        BLUE_BUILDING_BOAT_HUT = internal(94),
        BLUE_BUILDING_BOAT_HUT2 = internal(95),
        BLUE_BUILDING_AIRSHIP_HUT = internal(96),
        BLUE_BUILDING_AIRSHIP_HUT2 = internal(97),
        RED_BUILDING_SMALL_HUT = internal(98),
        RED_BUILDING_MEDIUM_HUT = internal(99),
        RED_BUILDING_LARGE_HUT = internal(100),
        RED_BUILDING_DRUM_TOWER = internal(101),
        RED_BUILDING_TEMPLE = internal(102),
        RED_BUILDING_SPY_TRAIN = internal(103),
        RED_BUILDING_WARRIOR_TRAIN = internal(104),
        RED_BUILDING_FIREWARRIOR_TRAIN = internal(105),
        RED_BUILDING_RECONVERSION = internal(106),
        RED_BUILDING_WALL_PIECE = internal(107),
        RED_BUILDING_GATE = internal(108),
        RED_BUILDING_CURR_OE_SLOT = internal(109),
        RED_BUILDING_BOAT_HUT = internal(110),
        RED_BUILDING_BOAT_HUT2 = internal(111),
        RED_BUILDING_AIRSHIP_HUT = internal(112),
        RED_BUILDING_AIRSHIP_HUT2 = internal(113),
        YELLOW_BUILDING_SMALL_HUT = internal(114),
        YELLOW_BUILDING_MEDIUM_HUT = internal(115),
        YELLOW_BUILDING_LARGE_HUT = internal(116),
        YELLOW_BUILDING_DRUM_TOWER = internal(117),
        YELLOW_BUILDING_TEMPLE = internal(118),
        YELLOW_BUILDING_SPY_TRAIN = internal(119),
        YELLOW_BUILDING_WARRIOR_TRAIN = internal(120),
        YELLOW_BUILDING_FIREWARRIOR_TRAIN = internal(121),
        YELLOW_BUILDING_RECONVERSION = internal(122),
        YELLOW_BUILDING_WALL_PIECE = internal(123),
        YELLOW_BUILDING_GATE = internal(124),
        YELLOW_BUILDING_CURR_OE_SLOT = internal(125),
        YELLOW_BUILDING_BOAT_HUT = internal(126),
        YELLOW_BUILDING_BOAT_HUT2 = internal(127),
        YELLOW_BUILDING_AIRSHIP_HUT = internal(128),
        YELLOW_BUILDING_AIRSHIP_HUT2 = internal(129),
        GREEN_BUILDING_SMALL_HUT = internal(130),
        GREEN_BUILDING_MEDIUM_HUT = internal(131),
        GREEN_BUILDING_LARGE_HUT = internal(132),
        GREEN_BUILDING_DRUM_TOWER = internal(133),
        GREEN_BUILDING_TEMPLE = internal(134),
        GREEN_BUILDING_SPY_TRAIN = internal(135),
        GREEN_BUILDING_WARRIOR_TRAIN = internal(136),
        GREEN_BUILDING_FIREWARRIOR_TRAIN = internal(137),
        GREEN_BUILDING_RECONVERSION = internal(138),
        GREEN_BUILDING_WALL_PIECE = internal(139),
        GREEN_BUILDING_GATE = internal(140),
        GREEN_BUILDING_CURR_OE_SLOT = internal(141),
        GREEN_BUILDING_BOAT_HUT = internal(142),
        GREEN_BUILDING_BOAT_HUT2 = internal(143),
        GREEN_BUILDING_AIRSHIP_HUT = internal(144),
        GREEN_BUILDING_AIRSHIP_HUT2 = internal(145),
        MY_PERSON_BRAVE = internal(146),
        MY_PERSON_WARRIOR = internal(147),
        MY_PERSON_RELIGIOUS = internal(148),
        MY_PERSON_SPY = internal(149),
        MY_PERSON_FIREWARRIOR = internal(150),
        MY_PERSON_SHAMAN = internal(151),
        BLUE_PERSON_BRAVE = internal(152),
        BLUE_PERSON_WARRIOR = internal(153),
        BLUE_PERSON_RELIGIOUS = internal(154),
        BLUE_PERSON_SPY = internal(155),
        BLUE_PERSON_FIREWARRIOR = internal(156),
        BLUE_PERSON_SHAMAN = internal(157),
        RED_PERSON_BRAVE = internal(158),
        RED_PERSON_WARRIOR = internal(159),
        RED_PERSON_RELIGIOUS = internal(160),
        RED_PERSON_SPY = internal(161),
        RED_PERSON_FIREWARRIOR = internal(162),
        RED_PERSON_SHAMAN = internal(163),
        YELLOW_PERSON_BRAVE = internal(164),
        YELLOW_PERSON_WARRIOR = internal(165),
        YELLOW_PERSON_RELIGIOUS = internal(166),
        YELLOW_PERSON_SPY = internal(167),
        YELLOW_PERSON_FIREWARRIOR = internal(168),
        YELLOW_PERSON_SHAMAN = internal(169),
        GREEN_PERSON_BRAVE = internal(170),
        GREEN_PERSON_WARRIOR = internal(171),
        GREEN_PERSON_RELIGIOUS = internal(172),
        GREEN_PERSON_SPY = internal(173),
        GREEN_PERSON_FIREWARRIOR = internal(174),
        GREEN_PERSON_SHAMAN = internal(175),
        BLUE_KILLED_BY_ME = internal(176),
        RED_KILLED_BY_ME = internal(177),
        YELLOW_KILLED_BY_ME = internal(178),
        GREEN_KILLED_BY_ME = internal(179),
        MY_NUM_KILLED_BY_BLUE = internal(180),
        MY_NUM_KILLED_BY_RED = internal(181),
        MY_NUM_KILLED_BY_YELLOW = internal(182),
        MY_NUM_KILLED_BY_GREEN = internal(183),
        BURN = internal(184),
        BLAST = internal(185),
        LIGHTNING_BOLT = internal(186),
        WHIRLWIND = internal(187),
        INSECT_PLAGUE = internal(188),
        INVISIBILITY = internal(189),
        HYPNOTISM = internal(190),
        FIRESTORM = internal(191),
        GHOST_ARMY = internal(192),
        EROSION = internal(193),
        SWAMP = internal(194),
        LAND_BRIDGE = internal(195),
        ANGEL_OF_DEAD = internal(196),
        EARTHQUAKE = internal(197),
        FLATTEN = internal(198),
        VOLCANO = internal(199),
        WRATH_OF_GOD = internal(200),
        BRAVE = internal(201),
        WARRIOR = internal(202),
        RELIGIOUS = internal(203),
        SPY = internal(204),
        FIREWARRIOR = internal(205),
        SHAMAN = internal(206),
        SMALL_HUT = internal(207),
        MEDIUM_HUT = internal(208),
        LARGE_HUT = internal(209),
        DRUM_TOWER = internal(210),
        TEMPLE = internal(211),
        SPY_TRAIN = internal(212),
        WARRIOR_TRAIN = internal(213),
        FIREWARRIOR_TRAIN = internal(214),
        RECONVERSION = internal(215),
        WALL_PIECE = internal(216),
        GATE = internal(217),
        BOAT_HUT = internal(218),
        BOAT_HUT2 = internal(219),
        AIRSHIP_HUT = internal(220),
        AIRSHIP_HUT2 = internal(221),
        NO_SPECIFIC_PERSON = internal(222),
        NO_SPECIFIC_BUILDING = internal(223),
        NO_SPECIFIC_SPELL = internal(224),
        TARGET_SHAMAN = internal(225),
        MY_VEHICLE_BOAT = internal(226),
        MY_VEHICLE_AIRSHIP = internal(227),
        BLUE_VEHICLE_BOAT = internal(228),
        BLUE_VEHICLE_AIRSHIP = internal(229),
        RED_VEHICLE_BOAT = internal(230),
        RED_VEHICLE_AIRSHIP = internal(231),
        YELLOW_VEHICLE_BOAT = internal(232),
        YELLOW_VEHICLE_AIRSHIP = internal(233),
        GREEN_VEHICLE_BOAT = internal(234),
        GREEN_VEHICLE_AIRSHIP = internal(235),
        CP_FREE_ENTRIES = internal(236),
        RANDOM100 = internal(237),
        NUM_SHAMEN_DEFENDERS = internal(238),
        CAMERA_ANGLE = internal(239),
        CAMERA_X = internal(240),
        CAMERA_Y = internal(241),
        MY_SPELL_SHIELD_COST = internal(242),
        SHIELD = internal(243),
        CONVERT = internal(244),
        TELEPORT = internal(245),
        BLOODLUST = internal(246),
    }
}

/// Offsets inside the command block that hold command values rather than commands
pub const COMMAND_VALUE_RANGES: [RangeInclusive<ScriptCode>; 5] = [
    command(31)..=command(31),
    command(43)..=command(45),
    command(51)..=command(53),
    command(60)..=command(61),
    command(91)..=command(94),
];

pub const INSTRUCTION_BAND: RangeInclusive<ScriptCode> = token(0)..=token(NO_COMMANDS - 1);
pub const COMMAND_BAND: RangeInclusive<ScriptCode> = command(0)..=command(COMMAND_BLOCK_LEN - 1);
pub const DIRECT_BAND: RangeInclusive<ScriptCode> = direct(0)..=direct(DIRECT_COUNT - 1);
pub const ATTRIBUTE_BAND: RangeInclusive<ScriptCode> = internal(0)..=internal(ATTRIBUTE_COUNT - 1);
pub const READ_ONLY_BAND: RangeInclusive<ScriptCode> = internal(ATTRIBUTE_COUNT)..=internal(246);

/// Code stream band of a `ScriptCode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    RawInteger,
    Instruction,
    Command,
    CommandValue,
    Unassigned,
}

/// Field namespace band of an internal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalBand {
    /// Read-only counters stored as raw numbers (turn, populations, mana)
    Direct,
    /// Tunable AI attributes
    Attribute,
    /// Read-only values after the attribute block
    ReadOnly,
}

/// Classify a code stream value by range membership alone.
pub fn classify(code: ScriptCode) -> Band {
    if code <= RAW_INTEGER_MAX {
        Band::RawInteger
    } else if INSTRUCTION_BAND.contains(&code) {
        Band::Instruction
    } else if COMMAND_BAND.contains(&code) {
        if COMMAND_VALUE_RANGES.iter().any(|r| r.contains(&code)) {
            Band::CommandValue
        } else {
            Band::Command
        }
    } else {
        Band::Unassigned
    }
}

/// Classify an internal field value. Values outside every internal band yield `None`.
pub fn classify_internal(value: ScriptCode) -> Option<InternalBand> {
    if DIRECT_BAND.contains(&value) {
        Some(InternalBand::Direct)
    } else if ATTRIBUTE_BAND.contains(&value) {
        Some(InternalBand::Attribute)
    } else if READ_ONLY_BAND.contains(&value) {
        Some(InternalBand::ReadOnly)
    } else {
        None
    }
}

fn lookup(table: &'static [(&'static str, ScriptCode)], code: ScriptCode) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, value)| *value == code)
        .map(|(name, _)| *name)
}

/// Name of a code stream token, if one is assigned to `code`.
pub fn code_name(code: ScriptCode) -> Option<&'static str> {
    match classify(code) {
        Band::Instruction => lookup(instruction::ALL, code),
        Band::Command => lookup(command::ALL, code),
        Band::CommandValue => lookup(command_value::ALL, code),
        Band::RawInteger | Band::Unassigned => None,
    }
}

/// Name of an internal field value, if one is assigned to `value`.
pub fn internal_name(value: ScriptCode) -> Option<&'static str> {
    match classify_internal(value)? {
        InternalBand::Attribute => lookup(attribute::ALL, value),
        InternalBand::Direct | InternalBand::ReadOnly => lookup(read_only::ALL, value),
    }
}

#[cfg(test)]
#[path = "code_space_tests.rs"]
mod tests;
