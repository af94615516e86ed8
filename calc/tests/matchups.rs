use drool_calc::{
    AnalysisConfig, AnalysisSortKey, MatrixSortKey, MatrixView, Orientation, Shade, SortDirection,
    SortState, analyze_defender, build_ko_matrix, build_matrix, compute_damage, effectiveness,
    sort_results,
};
use drool_records::{
    Monster, Move, MoveClass, MoveValue, TypeChart, parse_monsters, parse_moves, parse_type_chart,
};
use pretty_assertions::assert_eq;

const MONS: &str = "\
Name,HP,Attack,Defense,SpecialAttack,SpecialDefense,Speed,Type1,Type2,BST
Cindrake,100,100,50,90,60,80,Fire,NA,480
Thornhide,100,70,50,60,50,40,Nature,NA,370
Galewing,80,60,60,110,70,100,Air,Mind,480
Pebblet,120,80,120,30,90,20,Earth,NA,460
";

const MOVES: &str = "\
Name,Mon,Type,Class,Power,Accuracy,Stamina
Flame Fang,Cindrake,Fire,Physical,50,95,2
Heat Haze,Cindrake,Fire,Special,40,100,2
Roar,Cindrake,Fire,Other,0,100,1
Bramble,Thornhide,Nature,Physical,55,90,2
Squall,Galewing,Air,Special,60,95,3
Mind Spike,Galewing,Mind,Special,?,100,2
Tailwind,Galewing,Air,Self,0,100,1
Orphan Strike,Nobody,Earth,Physical,200,100,1
";

const TYPES: &str = "\
Attacker,Defender,Multiplier
Fire,Fire,5
Fire,Nature,2
Fire,Air,1
Fire,Mind,1
Fire,Earth,5
Nature,Fire,5
Nature,Nature,5
Nature,Air,5
Nature,Mind,1
Nature,Earth,2
Air,Fire,1
Air,Nature,2
Air,Air,1
Air,Mind,1
Air,Earth,0
";

fn load() -> (TypeChart, Vec<Monster>, Vec<Move>) {
    (
        parse_type_chart(TYPES).unwrap(),
        parse_monsters(MONS).unwrap(),
        parse_moves(MOVES).unwrap(),
    )
}

#[test]
fn concrete_super_effective_scenario() {
    let (chart, mons, moves) = load();
    let result = compute_damage(&chart, &moves[0], &mons[0], &mons[1])
        .unwrap()
        .unwrap();

    assert_eq!(result.base_damage, 100.0);
    assert_eq!(result.type_multiplier, 2.0);
    assert_eq!(result.damage, 200.0);
    assert_eq!(result.percent_hp, 200.0);
}

#[test]
fn concrete_sentinel_scenario() {
    let (_, mons, moves) = load();
    let chart = TypeChart::new().with("Fire", "Nature", 5.0);
    let result = compute_damage(&chart, &moves[0], &mons[0], &mons[1])
        .unwrap()
        .unwrap();

    assert_eq!(result.type_multiplier, 0.5);
    assert_eq!(result.damage, 50.0);
    assert_eq!(result.percent_hp, 50.0);
}

#[test]
fn non_damaging_moves_never_produce_results() {
    let (chart, mons, _) = load();
    for class in [MoveClass::Other, MoveClass::SelfTarget] {
        for power in [MoveValue::Known(0), MoveValue::Known(120), MoveValue::Unknown] {
            let mv = Move::new("Probe", "Cindrake", "Fire", class.clone(), power);
            for defender in &mons {
                assert_eq!(compute_damage(&chart, &mv, &mons[0], defender), Ok(None));
            }
        }
    }
    for power in [MoveValue::Known(0), MoveValue::Unknown] {
        let mv = Move::new("Probe", "Cindrake", "Fire", MoveClass::Physical, power);
        assert_eq!(compute_damage(&chart, &mv, &mons[0], &mons[3]), Ok(None));
    }
}

#[test]
fn second_type_absence_is_neutral() {
    let (chart, _, _) = load();
    let single = effectiveness(&chart, "Air", "Nature", None).unwrap();
    assert_eq!(single, 2.0);
    assert_eq!(effectiveness(&chart, "Air", "Nature", Some("NA")).unwrap(), single);
    assert_eq!(effectiveness(&chart, "Fire", "Earth", None).unwrap(), 0.5);
}

#[test]
fn matrix_is_square_and_idempotent() {
    let (chart, mons, moves) = load();
    let matrix = build_matrix(&chart, &mons, &moves);
    assert_eq!(matrix.len(), mons.len());
    for (i, row) in matrix.rows.iter().enumerate() {
        assert_eq!(row.attacker, mons[i].name);
        assert_eq!(row.cells.len(), mons.len());
        assert_eq!(row.cells[i].defender, mons[i].name);
    }
    assert_eq!(matrix, build_matrix(&chart, &mons, &moves));
    assert!(matrix.issues.is_empty());
}

#[test]
fn matrix_best_moves() {
    let (chart, mons, moves) = load();
    let matrix = build_matrix(&chart, &mons, &moves);

    let cell = matrix.find("Cindrake", "Thornhide").unwrap();
    assert_eq!(cell.percent_hp(), 200.0);
    assert_eq!(cell.source(), "Flame Fang (Physical)");

    // Flame Fang 50*100/60 = 83.3 against Heat Haze 40*90/70 = 51.4
    let cell = matrix.find("Cindrake", "Galewing").unwrap();
    assert_eq!(cell.move_name(), Some("Flame Fang"));

    // Air is useless against Earth, so nothing beats 0%
    let cell = matrix.find("Galewing", "Pebblet").unwrap();
    assert_eq!(cell.percent_hp(), 0.0);
    assert_eq!(cell.source(), "");

    // Self-pair computed like any other
    let cell = matrix.find("Thornhide", "Thornhide").unwrap();
    // 55*70/50*0.5 = 38.5
    assert_eq!(cell.percent_hp(), 38.5);
}

#[test]
fn pebblet_has_no_moves() {
    let (chart, mons, moves) = load();
    let matrix = build_matrix(&chart, &mons, &moves);
    let row = &matrix.rows[3];
    assert_eq!(row.attacker, "Pebblet");
    assert!(row.cells.iter().all(|c| c.percent_hp() == 0.0 && c.source().is_empty()));
}

#[test]
fn analysis_is_exhaustive_and_sortable() {
    let (chart, mons, moves) = load();
    let analysis = analyze_defender(&chart, &mons, &moves, 1).unwrap();

    // Flame Fang, Heat Haze, Bramble, Squall
    assert_eq!(analysis.len(), 4);

    let (sorted, state) =
        sort_results(analysis.moves, AnalysisSortKey::PercentHp, SortState::new());
    assert_eq!(state.direction, SortDirection::Descending);
    let order: Vec<_> = sorted.iter().map(|m| m.damage.move_name.as_str()).collect();
    // 264, 200, 144, 38.5
    assert_eq!(order, vec!["Squall", "Flame Fang", "Heat Haze", "Bramble"]);

    let (sorted, state) = sort_results(sorted, AnalysisSortKey::PercentHp, state);
    assert_eq!(state.direction, SortDirection::Ascending);
    assert_eq!(sorted[0].damage.move_name, "Bramble");
}

#[test]
fn transposed_view_reads_the_same_cells() {
    let (chart, mons, moves) = load();
    let matrix = build_matrix(&chart, &mons, &moves);
    let attacker_view = MatrixView::new(&matrix, Orientation::AttackerMajor);
    let defender_view = MatrixView::new(&matrix, Orientation::DefenderMajor);

    for i in 0..mons.len() {
        for j in 0..mons.len() {
            assert_eq!(attacker_view.cell(i, j), defender_view.cell(j, i));
        }
    }

    let mut view = defender_view;
    // Column 0 is Cindrake attacking
    view.sort_by(MatrixSortKey::Column(0));
    assert_eq!(view.row_name(0), Some("Thornhide"));
}

#[test]
fn shading_over_matrix_values() {
    let (chart, mons, moves) = load();
    let matrix = build_matrix(&chart, &mons, &moves);
    let config = AnalysisConfig::default();
    let scale = config.intensity_scale(matrix.cells().map(|c| c.percent_hp()));

    assert_eq!(scale.min(), 0.0);
    // Galewing's Squall into Thornhide
    assert_eq!(scale.max(), 264.0);
    assert_eq!(config.shade(&scale, 264.0), Shade::High);
    assert_eq!(config.shade(&scale, 66.0), Shade::Scaled(10));
}

#[test]
fn ko_thresholds_over_parsed_roster() {
    let (_, mons, _) = load();
    let ko = build_ko_matrix(&mons);

    assert_eq!(ko.len(), mons.len());
    assert!(ko.issues.is_empty());

    // Thornhide defending against Cindrake: 100 / (100 / 50) = 50 and 100 / (90 / 50) = 55.6
    let cell = ko.find("Thornhide", "Cindrake").unwrap();
    assert_eq!(cell.physical, Some(50.0));
    assert!((cell.special.unwrap() - 500.0 / 9.0).abs() < 1e-9);
    assert_eq!(cell.lowest(), Some(50.0));

    // Self-pairs are part of the grid
    let own = ko.find("Pebblet", "Pebblet").unwrap();
    // 120 / (80 / 120) = 180, 120 / (30 / 90) = 360
    assert!((own.physical.unwrap() - 180.0).abs() < 1e-9);
    assert!((own.special.unwrap() - 360.0).abs() < 1e-9);
}
