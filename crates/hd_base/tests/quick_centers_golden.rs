//! Calendar heuristic for defined centers, checked predicate by predicate
//! over every month/day pair.

use hd_base::{ALL_CENTERS, Center, Gate, quick_centers};

fn gate(n: u8) -> Gate {
    Gate::new(n).unwrap()
}

#[test]
fn every_predicate_every_date() {
    for month in 1..=12u32 {
        for day in 1..=31u32 {
            for g in [gate(41), gate(42)] {
                let s = quick_centers(month, day, g);
                let sp = month % 2 == 0;
                let expected = [
                    (Center::Sacral, (3..=9).contains(&month)),
                    (Center::Throat, (10..=25).contains(&day)),
                    (Center::SolarPlexus, sp),
                    (Center::Spleen, month <= 6 && !sp),
                    (Center::Root, day % 3 == 0),
                    (Center::Head, month >= 9 || month <= 3),
                    (Center::Ajna, month >= 9 || month <= 3),
                    (Center::G, g.is_even()),
                    (Center::Heart, day >= 25 && (6..=8).contains(&month)),
                ];
                for (c, want) in expected {
                    assert_eq!(s.contains(c), want, "{c} on {month}/{day} gate {g}");
                }
            }
        }
    }
}

#[test]
fn representative_dates() {
    // mid June: sacral, throat, solar plexus, root; no head/ajna
    let june = quick_centers(6, 15, gate(42));
    assert!(june.contains(Center::Sacral));
    assert!(june.contains(Center::Throat));
    assert!(june.contains(Center::SolarPlexus));
    assert!(june.contains(Center::Root));
    assert!(june.contains(Center::G));
    assert!(!june.contains(Center::Head));
    assert!(!june.contains(Center::Ajna));
    assert!(!june.contains(Center::Heart));

    // July 27th: heart window, odd month so spleen is off (month > 6)
    let july = quick_centers(7, 27, gate(41));
    assert!(july.contains(Center::Heart));
    assert!(july.contains(Center::Root));
    assert!(!july.contains(Center::Spleen));
    assert!(!july.contains(Center::Throat));

    // January 1st: head and ajna, spleen, nothing else
    let jan = quick_centers(1, 1, gate(41));
    let defined: Vec<_> = jan.iter().collect();
    assert_eq!(defined, vec![Center::Head, Center::Ajna, Center::Spleen]);
}

#[test]
fn never_all_nine() {
    // spleen and solar plexus are mutually exclusive
    for month in 1..=12u32 {
        for day in 1..=31u32 {
            let s = quick_centers(month, day, gate(2));
            assert!(s.len() < ALL_CENTERS.len() as u32);
            assert!(!(s.contains(Center::Spleen) && s.contains(Center::SolarPlexus)));
        }
    }
}
