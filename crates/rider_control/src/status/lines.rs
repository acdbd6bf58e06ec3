//! Operator-facing status rows.

use crate::activity::RiderActivity;
use crate::constants::{
    ACTIVITY_NOT_READY, AGE_SHOW_SECONDS_MAX_SECS, CITY_SCAN_NOT_READY, TAXI_SCAN_NOT_READY,
};
use crate::host::TransportType;

use super::resource::RiderStatus;

/// `1234567` → `"1,234,567"`.
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Age rounded to whole seconds: "12s", "3m 5s" below an hour, "2h 4m" above.
pub fn format_age(age_secs: f64) -> String {
    let sec = age_secs.max(0.0).round() as u64;
    if sec < 60 {
        format!("{sec}s")
    } else if sec < AGE_SHOW_SECONDS_MAX_SECS {
        format!("{}m {}s", sec / 60, sec % 60)
    } else {
        format!("{}h {}m", sec / 3600, (sec % 3600) / 60)
    }
}

/// Seconds since startup as `HH:MM:SS`.
pub fn format_clock(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Formats the snapshot and latest activity into the rows of the status
/// panel.
pub struct StatusLines<'a> {
    status: &'a RiderStatus,
    activity: &'a RiderActivity,
    now: f64,
}

impl<'a> StatusLines<'a> {
    pub fn new(status: &'a RiderStatus, activity: &'a RiderActivity, now: f64) -> Self {
        Self {
            status,
            activity,
            now,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status.has_snapshot()
    }

    pub fn coverage(&self) -> String {
        let r = &self.status.snapshot().residents;
        format!(
            "Residents {}/{} | Marked {} | Commuters {}/{} | Tourists {}/{}",
            format_thousands(r.ignore_taxi),
            format_thousands(r.total),
            format_thousands(r.marked),
            format_thousands(r.commuters_ignore_taxi),
            format_thousands(r.commuters_total),
            format_thousands(r.tourists_ignore_taxi),
            format_thousands(r.tourists_total),
        )
    }

    fn monthly_row(&self, pick: impl Fn(TransportType) -> u32) -> String {
        [
            TransportType::Taxi,
            TransportType::Bus,
            TransportType::Tram,
            TransportType::Subway,
            TransportType::Train,
        ]
        .iter()
        .map(|&mode| format!("{} {}", mode.label(), format_thousands(pick(mode))))
        .collect::<Vec<_>>()
        .join(" | ")
    }

    pub fn monthly_citizens(&self) -> String {
        let monthly = &self.status.snapshot().monthly;
        self.monthly_row(|mode| monthly.get(mode).citizen)
    }

    pub fn monthly_tourists(&self) -> String {
        let monthly = &self.status.snapshot().monthly;
        self.monthly_row(|mode| monthly.get(mode).tourist)
    }

    pub fn monthly_total(&self) -> String {
        let snapshot = self.status.snapshot();
        let total = snapshot.monthly.total();
        format!(
            "Waiting Transport {} | All Transit Use {}T/ {}C",
            format_thousands(snapshot.residents.waiting_transport),
            format_thousands(total.tourist),
            format_thousands(total.citizen),
        )
    }

    pub fn taxi_supply(&self) -> String {
        let snapshot = self.status.snapshot();
        format!(
            "{} TAXIS | {} DEPOTS | {} DispatchCenter | {} STANDS",
            format_thousands(snapshot.taxis.total),
            format_thousands(snapshot.facilities.taxi_depots),
            format_thousands(snapshot.facilities.taxi_depots_with_dispatch_center),
            format_thousands(snapshot.facilities.stands),
        )
    }

    pub fn requests(&self) -> String {
        let q = &self.status.snapshot().requests;
        format!(
            "{} Customer | {} Outside | {} None",
            format_thousands(q.customer),
            format_thousands(q.outside),
            format_thousands(q.none),
        )
    }

    pub fn passengers(&self) -> String {
        let p = &self.status.snapshot().passengers;
        format!(
            "{} Total | {}/{} Resident (IgnoreTaxi)",
            format_thousands(p.total),
            format_thousands(p.ignore_taxi),
            format_thousands(p.has_resident),
        )
    }

    pub fn fleet(&self) -> String {
        let t = &self.status.snapshot().taxis;
        format!(
            "Transport {} | Boarding {} | Return {} | Dispatch {} | EnRoute {} | Parked {}",
            format_thousands(t.transporting),
            format_thousands(t.boarding),
            format_thousands(t.returning),
            format_thousands(t.dispatched),
            format_thousands(t.en_route),
            format_thousands(t.parked),
        )
    }

    pub fn taxi_flags(&self) -> String {
        let t = &self.status.snapshot().taxis;
        format!(
            "{} WithDispatch | {} FromOutside | {} Disabled",
            format_thousands(t.with_dispatch_buffer),
            format_thousands(t.from_outside),
            format_thousands(t.disabled),
        )
    }

    pub fn stands(&self) -> String {
        let snapshot = self.status.snapshot();
        format!(
            "{} Waiting at stand | {} Stand Requests",
            format_thousands(snapshot.waiting_at_stands),
            format_thousands(snapshot.requests.stand),
        )
    }

    pub fn work_done(&self) -> [String; 2] {
        let a = self.activity;
        if !a.has_activity() {
            return [ACTIVITY_NOT_READY.to_string(), String::new()];
        }
        [
            format!(
                "IgnoreTaxiApplied {} | RideNeederRemoved {} | TaxiLaneCleared {}",
                format_thousands(a.applied),
                format_thousands(a.cleared_ride_needs),
                format_thousands(a.cleared_lane_waiting),
            ),
            format!(
                "TaxiStandCleared {} | CommutersSkipped {} | TouristsSkipped {}",
                format_thousands(a.cleared_stand_waiting),
                format_thousands(a.skipped_commuters),
                format_thousands(a.skipped_tourists),
            ),
        ]
    }

    pub fn snapshot_meta(&self) -> String {
        let last = self
            .status
            .refreshed_at()
            .map_or_else(|| "n/a".to_string(), format_clock);
        format!("Last {} | Age {}", last, self.status.age_text(self.now))
    }

    /// Every row in panel order, or the not-ready notices before the first
    /// snapshot.
    pub fn all(&self) -> Vec<String> {
        if !self.is_ready() {
            return vec![
                CITY_SCAN_NOT_READY.to_string(),
                TAXI_SCAN_NOT_READY.to_string(),
            ];
        }
        let [work_1, work_2] = self.work_done();
        let mut rows = vec![
            self.coverage(),
            self.monthly_citizens(),
            self.monthly_tourists(),
            self.monthly_total(),
            self.taxi_supply(),
            self.requests(),
            self.passengers(),
            self.fleet(),
            self.taxi_flags(),
            self.stands(),
            work_1,
        ];
        if !work_2.is_empty() {
            rows.push(work_2);
        }
        rows.push(self.snapshot_meta());
        rows
    }
}
