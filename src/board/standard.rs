//! The classic six-power European map.
//!
//! Static province and adjacency data feeding a [`MapBoard`]. Production
//! deployments supply their own topology provider; this map backs the test
//! suites, the benchmark, and the replay binary. Each nation has five home
//! provinces; shipyard-capable homes sit on a coast.

use super::graph::MapBoard;
use super::nation::Nation;
use super::province::FactoryKind;

use FactoryKind::{Armaments, Shipyard};
use Nation::{AustriaHungary, France, Germany, GreatBritain, Italy, Russia};

/// Land provinces: name, home nation, buildable factory kind.
const LANDS: &[(&str, Option<Nation>, Option<FactoryKind>)] = &[
    // Austria-Hungary
    ("vienna", Some(AustriaHungary), Some(Armaments)),
    ("budapest", Some(AustriaHungary), Some(Armaments)),
    ("prague", Some(AustriaHungary), Some(Armaments)),
    ("lemberg", Some(AustriaHungary), Some(Armaments)),
    ("trieste", Some(AustriaHungary), Some(Shipyard)),
    // Italy
    ("rome", Some(Italy), Some(Armaments)),
    ("venice", Some(Italy), Some(Armaments)),
    ("florence", Some(Italy), Some(Armaments)),
    ("naples", Some(Italy), Some(Shipyard)),
    ("genoa", Some(Italy), Some(Shipyard)),
    // France
    ("paris", Some(France), Some(Armaments)),
    ("dijon", Some(France), Some(Armaments)),
    ("marseille", Some(France), Some(Shipyard)),
    ("bordeaux", Some(France), Some(Shipyard)),
    ("brest", Some(France), Some(Shipyard)),
    // Great Britain
    ("london", Some(GreatBritain), Some(Shipyard)),
    ("liverpool", Some(GreatBritain), Some(Shipyard)),
    ("edinburgh", Some(GreatBritain), Some(Shipyard)),
    ("dublin", Some(GreatBritain), Some(Shipyard)),
    ("sheffield", Some(GreatBritain), Some(Armaments)),
    // Germany
    ("berlin", Some(Germany), Some(Armaments)),
    ("munich", Some(Germany), Some(Armaments)),
    ("cologne", Some(Germany), Some(Armaments)),
    ("hamburg", Some(Germany), Some(Shipyard)),
    ("danzig", Some(Germany), Some(Shipyard)),
    // Russia
    ("moscow", Some(Russia), Some(Armaments)),
    ("kiev", Some(Russia), Some(Armaments)),
    ("warsaw", Some(Russia), Some(Armaments)),
    ("st petersburg", Some(Russia), Some(Shipyard)),
    ("odessa", Some(Russia), Some(Shipyard)),
    // Neutral lands
    ("norway", None, None),
    ("sweden", None, None),
    ("denmark", None, None),
    ("holland", None, None),
    ("belgium", None, None),
    ("spain", None, None),
    ("portugal", None, None),
    ("morocco", None, None),
    ("algeria", None, None),
    ("tunis", None, None),
    ("tripoli", None, None),
    ("greece", None, None),
    ("west balkans", None, None),
    ("bulgaria", None, None),
    ("romania", None, None),
    ("turkey", None, None),
];

/// Ocean provinces.
const OCEANS: &[&str] = &[
    "north atlantic",
    "irish sea",
    "english channel",
    "north sea",
    "baltic sea",
    "bay of biscay",
    "western mediterranean",
    "ionian sea",
    "eastern mediterranean",
    "black sea",
];

/// Undirected adjacency; `MapBoard::connect` inserts both directions.
const EDGES: &[(&str, &str)] = &[
    // Iberia and France
    ("portugal", "spain"),
    ("spain", "bordeaux"),
    ("spain", "marseille"),
    ("bordeaux", "brest"),
    ("bordeaux", "paris"),
    ("bordeaux", "dijon"),
    ("brest", "paris"),
    ("paris", "dijon"),
    ("paris", "belgium"),
    ("dijon", "marseille"),
    ("dijon", "belgium"),
    ("dijon", "cologne"),
    ("dijon", "munich"),
    ("marseille", "genoa"),
    // Italy
    ("genoa", "florence"),
    ("genoa", "venice"),
    ("florence", "rome"),
    ("florence", "venice"),
    ("rome", "naples"),
    ("venice", "trieste"),
    ("venice", "vienna"),
    // Austria-Hungary and the Balkans
    ("trieste", "vienna"),
    ("trieste", "west balkans"),
    ("vienna", "budapest"),
    ("vienna", "prague"),
    ("vienna", "munich"),
    ("prague", "berlin"),
    ("prague", "munich"),
    ("prague", "lemberg"),
    ("budapest", "lemberg"),
    ("budapest", "west balkans"),
    ("budapest", "romania"),
    ("lemberg", "warsaw"),
    ("lemberg", "kiev"),
    ("lemberg", "romania"),
    ("west balkans", "greece"),
    ("west balkans", "bulgaria"),
    ("greece", "bulgaria"),
    ("bulgaria", "romania"),
    ("bulgaria", "turkey"),
    ("romania", "odessa"),
    ("romania", "kiev"),
    // Low countries, Germany, Scandinavia
    ("belgium", "holland"),
    ("belgium", "cologne"),
    ("holland", "cologne"),
    ("holland", "hamburg"),
    ("cologne", "hamburg"),
    ("cologne", "munich"),
    ("hamburg", "denmark"),
    ("hamburg", "berlin"),
    ("berlin", "danzig"),
    ("berlin", "munich"),
    ("danzig", "warsaw"),
    ("norway", "sweden"),
    // Russia
    ("warsaw", "kiev"),
    ("warsaw", "moscow"),
    ("moscow", "st petersburg"),
    ("moscow", "kiev"),
    ("kiev", "odessa"),
    // Britain
    ("edinburgh", "sheffield"),
    ("sheffield", "london"),
    ("sheffield", "liverpool"),
    ("liverpool", "edinburgh"),
    // North Africa
    ("morocco", "algeria"),
    ("algeria", "tunis"),
    ("tunis", "tripoli"),
    // North Atlantic and home waters
    ("north atlantic", "irish sea"),
    ("north atlantic", "bay of biscay"),
    ("north atlantic", "western mediterranean"),
    ("north atlantic", "dublin"),
    ("north atlantic", "portugal"),
    ("north atlantic", "morocco"),
    ("irish sea", "english channel"),
    ("irish sea", "dublin"),
    ("irish sea", "liverpool"),
    ("english channel", "north sea"),
    ("english channel", "bay of biscay"),
    ("english channel", "london"),
    ("english channel", "brest"),
    ("english channel", "belgium"),
    ("north sea", "baltic sea"),
    ("north sea", "london"),
    ("north sea", "edinburgh"),
    ("north sea", "norway"),
    ("north sea", "denmark"),
    ("north sea", "holland"),
    ("north sea", "hamburg"),
    ("baltic sea", "sweden"),
    ("baltic sea", "denmark"),
    ("baltic sea", "danzig"),
    ("baltic sea", "st petersburg"),
    ("bay of biscay", "brest"),
    ("bay of biscay", "bordeaux"),
    ("bay of biscay", "spain"),
    // Mediterranean
    ("western mediterranean", "spain"),
    ("western mediterranean", "marseille"),
    ("western mediterranean", "genoa"),
    ("western mediterranean", "algeria"),
    ("western mediterranean", "morocco"),
    ("western mediterranean", "ionian sea"),
    ("ionian sea", "naples"),
    ("ionian sea", "rome"),
    ("ionian sea", "venice"),
    ("ionian sea", "trieste"),
    ("ionian sea", "west balkans"),
    ("ionian sea", "tunis"),
    ("ionian sea", "tripoli"),
    ("ionian sea", "greece"),
    ("ionian sea", "eastern mediterranean"),
    ("eastern mediterranean", "greece"),
    ("eastern mediterranean", "turkey"),
    ("eastern mediterranean", "black sea"),
    ("black sea", "odessa"),
    ("black sea", "romania"),
    ("black sea", "bulgaria"),
    ("black sea", "turkey"),
];

/// Builds the classic map as a [`MapBoard`].
pub fn standard_map() -> MapBoard {
    let mut board = MapBoard::new();
    for &(name, owner, factory_kind) in LANDS {
        board.add_land(name, owner, factory_kind);
    }
    for &name in OCEANS {
        board.add_ocean(name);
    }
    for &(a, b) in EDGES {
        board.connect(a, b);
    }
    board
}
