//! Demo data
//!
//! Fixed readings shown until a sensor pipeline exists.

use crate::domain::entities::*;
use crate::domain::value_objects::{AlertLevel, DrowsinessStatus, TimeRange, Trend};

fn s(value: &str) -> String {
    value.to_string()
}

pub fn driver_overview() -> DriverOverview {
    DriverOverview {
        drowsiness: DrowsinessReading {
            status: DrowsinessStatus::Safe,
            level: 15,
            last_updated: s("2 minutes ago"),
        },
        vitals: Vitals {
            heart_rate: Vital {
                value: 72,
                unit: "bpm",
                status: "normal",
            },
            temperature: Vital {
                value: 98.6,
                unit: "°F",
                status: "normal",
            },
            blood_pressure: Vital {
                value: s("120/80"),
                unit: "mmHg",
                status: "normal",
            },
        },
        notifications: vec![
            Notification {
                id: 1,
                level: AlertLevel::Info,
                message: s("Route updated - ETA 2:30 PM"),
                time: s("5 min ago"),
            },
            Notification {
                id: 2,
                level: AlertLevel::Warning,
                message: s("Take a break in 30 minutes"),
                time: s("15 min ago"),
            },
            Notification {
                id: 3,
                level: AlertLevel::Success,
                message: s("Safety check completed"),
                time: s("1 hour ago"),
            },
        ],
    }
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    [
        ("Jane Doe", "+1 (555) 987-6543", "Spouse"),
        ("Bob Smith", "+1 (555) 456-7890", "Friend"),
    ]
    .into_iter()
    .map(|(name, phone, relationship)| {
        NewEmergencyContact {
            name: s(name),
            phone: s(phone),
            relationship: s(relationship),
        }
        .into_contact()
    })
    .collect()
}

/// Profile shown before the driver edits it
pub fn driver_profile() -> DriverProfile {
    DriverProfile {
        name: s("John Doe"),
        email: s("john.doe@example.com"),
        phone: s("+1 (555) 123-4567"),
        license_id: s("DL123456789"),
        vehicle_id: s("VH987654321"),
        address: s("123 Main St, City, State 12345"),
    }
}

pub fn help() -> HelpContent {
    let faq = |question: &str, answer: &str| Faq {
        question: s(question),
        answer: s(answer),
    };
    let step = |step, title: &str, description: &str| TroubleshootingStep {
        step,
        title: s(title),
        description: s(description),
    };

    HelpContent {
        faqs: vec![
            faq(
                "How does SmartGuard detect drowsiness?",
                "SmartGuard uses advanced AI algorithms to analyze your facial features, eye movements, and head position through your device's camera. It continuously monitors these indicators to detect signs of drowsiness and alerts you when necessary.",
            ),
            faq(
                "What should I do if I receive a drowsiness alert?",
                "If you receive a drowsiness alert, immediately pull over to a safe location and take a break. Get out of your vehicle, stretch, and consider taking a short nap if needed. Never continue driving when drowsy.",
            ),
            faq(
                "How accurate is the health monitoring?",
                "Our health monitoring system provides real-time data with high accuracy. However, it's not a substitute for professional medical advice. Always consult healthcare professionals for medical concerns.",
            ),
            faq(
                "Can I use SmartGuard at night?",
                "Yes, SmartGuard works in various lighting conditions including low-light and night driving. The system automatically adjusts to different lighting environments to maintain accuracy.",
            ),
            faq(
                "How do I update my emergency contacts?",
                "Go to your Profile section and navigate to Emergency Contacts. You can add, edit, or remove contacts as needed. Make sure to keep this information up to date.",
            ),
            faq(
                "What happens when I press the Emergency SOS button?",
                "The Emergency SOS button immediately contacts emergency services and your emergency contacts with your location and vehicle information. Only use this in genuine emergency situations.",
            ),
        ],
        troubleshooting: vec![
            step(
                1,
                "Check Camera Access",
                "Ensure SmartGuard has permission to access your device's camera. Go to your device settings and verify camera permissions are enabled.",
            ),
            step(
                2,
                "Restart the Application",
                "Close SmartGuard completely and restart it. This often resolves temporary glitches and connectivity issues.",
            ),
            step(
                3,
                "Check Internet Connection",
                "Verify you have a stable internet connection. SmartGuard requires internet access for real-time monitoring and alerts.",
            ),
            step(
                4,
                "Update the App",
                "Make sure you're using the latest version of SmartGuard. Check your app store for available updates.",
            ),
            step(
                5,
                "Clear Cache and Data",
                "If issues persist, try clearing the app's cache and data. This will reset the app to its default state.",
            ),
        ],
        support: SupportChannels {
            email: s("support@smartguard.com"),
            phone: s("1-800-SMARTGUARD"),
        },
    }
}

pub fn fleet_overview() -> FleetOverview {
    let stat = |label: &str, value: &str, change: &str, trend| OverviewStat {
        label: s(label),
        value: s(value),
        change: s(change),
        trend,
    };
    let alert = |id, driver: &str, vehicle: &str, level, message: &str, time: &str| FleetAlert {
        id,
        driver: s(driver),
        vehicle: s(vehicle),
        level,
        message: s(message),
        time: s(time),
    };
    let row = |id, name: &str, vehicle: &str, status, location: &str, last_update: &str| {
        DriverStatusRow {
            id,
            name: s(name),
            vehicle: s(vehicle),
            status,
            location: s(location),
            last_update: s(last_update),
        }
    };

    FleetOverview {
        stats: vec![
            stat("Active Drivers", "24", "+2", Trend::Up),
            stat("Alerts Today", "7", "-3", Trend::Down),
            stat("Critical Incidents", "1", "0", Trend::Neutral),
            stat("Safety Score", "94.2%", "+1.8%", Trend::Up),
        ],
        recent_alerts: vec![
            alert(1, "John Smith", "TRK-001", AlertLevel::Warning, "Drowsiness detected", "5 min ago"),
            alert(2, "Sarah Johnson", "TRK-002", AlertLevel::Info, "Route completed", "15 min ago"),
            alert(3, "Mike Wilson", "TRK-003", AlertLevel::Critical, "Emergency stop activated", "1 hour ago"),
        ],
        driver_statuses: vec![
            row(1, "John Smith", "TRK-001", DrowsinessStatus::Safe, "I-95 N", "2 min ago"),
            row(2, "Sarah Johnson", "TRK-002", DrowsinessStatus::Warning, "US-1 S", "5 min ago"),
            row(3, "Mike Wilson", "TRK-003", DrowsinessStatus::Critical, "I-80 W", "1 hour ago"),
            row(4, "David Brown", "TRK-004", DrowsinessStatus::Safe, "I-90 E", "10 min ago"),
        ],
    }
}

pub fn roster() -> Vec<RosterDriver> {
    #[allow(clippy::too_many_arguments)]
    fn driver(
        id: u32,
        name: &str,
        vehicle_id: &str,
        location: &str,
        drowsiness_status: DrowsinessStatus,
        heart_rate: u32,
        temperature: f64,
        blood_pressure: &str,
        last_update: &str,
        alerts: u32,
    ) -> RosterDriver {
        RosterDriver {
            id,
            name: s(name),
            vehicle_id: s(vehicle_id),
            location: s(location),
            drowsiness_status,
            heart_rate,
            temperature,
            blood_pressure: s(blood_pressure),
            last_update: s(last_update),
            alerts,
        }
    }

    use DrowsinessStatus::*;
    vec![
        driver(1, "John Doe", "VH123456", "New York, NY", Safe, 72, 98.6, "120/80", "2 minutes ago", 0),
        driver(2, "Jane Smith", "VH789012", "Los Angeles, CA", Warning, 85, 99.1, "135/85", "5 minutes ago", 2),
        driver(3, "Mike Johnson", "VH345678", "Chicago, IL", Critical, 95, 100.2, "150/95", "1 minute ago", 5),
        driver(4, "Sarah Wilson", "VH901234", "Miami, FL", Safe, 68, 98.2, "115/75", "3 minutes ago", 0),
        driver(5, "David Brown", "VH567890", "Seattle, WA", Warning, 78, 98.8, "125/80", "4 minutes ago", 1),
    ]
}

/// The series are the same for every range; only the range is echoed.
pub fn analytics(range: TimeRange) -> FleetAnalytics {
    let trend = |date: &str, safe, warning, critical| DrowsinessTrendPoint {
        date: s(date),
        safe,
        warning,
        critical,
    };
    let health = |time: &str, heart_rate, temperature, blood_pressure| HealthMetricPoint {
        time: s(time),
        heart_rate,
        temperature,
        blood_pressure,
    };
    let share = |category: &str, count, color: &str| AlertShare {
        category: s(category),
        count,
        color: s(color),
    };
    let performance = |driver: &str, safety_score, alerts, miles| DriverPerformance {
        driver: s(driver),
        safety_score,
        alerts,
        miles,
    };

    FleetAnalytics {
        range,
        drowsiness_trends: vec![
            trend("Mon", 45, 12, 3),
            trend("Tue", 42, 15, 5),
            trend("Wed", 48, 10, 2),
            trend("Thu", 40, 18, 4),
            trend("Fri", 35, 22, 6),
            trend("Sat", 38, 20, 3),
            trend("Sun", 44, 14, 2),
        ],
        health_metrics: vec![
            health("00:00", 72, 98.6, 120),
            health("04:00", 68, 98.2, 118),
            health("08:00", 75, 98.8, 122),
            health("12:00", 78, 99.1, 125),
            health("16:00", 82, 99.3, 128),
            health("20:00", 76, 98.9, 123),
            health("24:00", 70, 98.4, 119),
        ],
        alert_distribution: vec![
            share("Drowsiness", 45, "#ef4444"),
            share("Health", 28, "#f59e0b"),
            share("Location", 15, "#3b82f6"),
            share("Vehicle", 12, "#10b981"),
        ],
        driver_performance: vec![
            performance("John Doe", 95, 2, 1200),
            performance("Jane Smith", 88, 5, 1100),
            performance("Mike Johnson", 92, 3, 1350),
            performance("Sarah Wilson", 97, 1, 980),
            performance("David Brown", 85, 7, 1250),
        ],
    }
}

pub fn landing() -> LandingContent {
    let feature = |title: &str, description: &str| Feature {
        title: s(title),
        description: s(description),
    };
    let stat = |label: &str, value: &str| HeadlineStat {
        label: s(label),
        value: s(value),
    };

    LandingContent {
        features: vec![
            feature(
                "Drowsiness Detection",
                "Advanced AI algorithms monitor driver alertness in real-time, detecting early signs of fatigue before they become dangerous.",
            ),
            feature(
                "Health Monitoring",
                "Continuous monitoring of vital signs including heart rate, temperature, and blood pressure to ensure driver wellness.",
            ),
            feature(
                "Emergency Alerts",
                "Instant notifications and emergency response system for critical situations, ensuring rapid assistance when needed.",
            ),
        ],
        stats: vec![
            stat("Drivers Protected", "10,000+"),
            stat("Fleets Managed", "500+"),
            stat("Safety Score", "99.8%"),
        ],
    }
}
