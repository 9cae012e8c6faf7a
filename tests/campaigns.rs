mod common;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use beeline_portal::{
    Answer, CampaignType, DateAndTime, VoiceCampaignMessage, VoiceCampaignQuestion,
    VoiceCampaignSchedule,
};
use chrono::{TimeZone, Utc};
use common::{client, portal_path};
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;

fn schedule() -> VoiceCampaignSchedule {
    VoiceCampaignSchedule {
        try_quantity: "2".into(),
        from_hour: "10".into(),
        to_hour: "19".into(),
        schedule: "EVERYDAY".into(),
    }
}

fn window() -> (DateAndTime, DateAndTime) {
    (
        DateAndTime {
            date: Utc.with_ymd_and_hms(2021, 7, 1, 0, 0, 0).unwrap(),
            time: "10:00".into(),
        },
        DateAndTime {
            date: Utc.with_ymd_and_hms(2021, 7, 5, 0, 0, 0).unwrap(),
            time: "19:00".into(),
        },
    )
}

fn campaign_json(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "status": "ACTIVE",
        "recordId": "r-1",
        "type": "MESSAGE",
        "audioFile": "audio-1",
        "phones": ["+79001112233"],
        "phoneNumber": "+74950000000",
        "schedule": {"tryQuantity": "2", "fromHour": "10", "toHour": "19", "schedule": "EVERYDAY"},
        "from": {"date": "2021-07-01", "time": "10:00"},
        "to": {"date": "2021-07-05", "time": "19:00"}
    })
}

#[test]
fn audio_is_uploaded_as_base64_body() {
    let server = MockServer::start();
    let audio = b"RIFF\x00\x01WAVEfmt ";
    let upload = server.mock(|when, then| {
        when.method(POST)
            .path(portal_path("vc/upload"))
            .body(STANDARD.encode(audio));
        then.status(200).json_body(json!({"id": "audio-1"}));
    });

    let file = client(&server).upload_voice_campaign_audio(audio).unwrap();

    upload.assert();
    assert_eq!(file.id, "audio-1");
}

#[test]
fn audio_file_is_read_from_disk() {
    let server = MockServer::start();
    let audio = b"ID3\x03\x00mp3-bytes";
    let upload = server.mock(|when, then| {
        when.method(POST)
            .path(portal_path("vc/upload"))
            .body(STANDARD.encode(audio));
        then.status(200).json_body(json!({"id": "audio-2"}));
    });

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(audio).unwrap();

    let uploaded = client(&server)
        .upload_voice_campaign_file(file.path())
        .unwrap();

    upload.assert();
    assert_eq!(uploaded.id, "audio-2");
}

#[test]
fn missing_audio_file_is_an_io_error() {
    let server = MockServer::start();
    let err = client(&server)
        .upload_voice_campaign_file("/definitely/not/here.wav")
        .unwrap_err();
    assert!(matches!(err, beeline_portal::Error::Io(_)));
    assert_eq!(err.code(), 500);
}

#[test]
fn campaigns_are_created_with_calendar_dates() {
    let server = MockServer::start();
    let (from, to) = window();

    let message = server.mock(|when, then| {
        when.method(POST).path(portal_path("vc/message")).json_body(json!({
            "name": "promo",
            "audioFile": "audio-1",
            "phones": ["+79001112233"],
            "phoneNumber": "+74950000000",
            "schedule": {"tryQuantity": "2", "fromHour": "10", "toHour": "19", "schedule": "EVERYDAY"},
            "from": {"date": "2021-07-01", "time": "10:00"},
            "to": {"date": "2021-07-05", "time": "19:00"}
        }));
        then.status(200).body("vc-1");
    });
    let question = server.mock(|when, then| {
        when.method(POST).path(portal_path("vc/question")).json_body(json!({
            "name": "survey",
            "answers": [{"choice": "1", "answer": "201"}],
            "audioFile": "audio-1",
            "phones": ["+79001112233"],
            "phoneNumber": "+74950000000",
            "schedule": {"tryQuantity": "2", "fromHour": "10", "toHour": "19", "schedule": "EVERYDAY"},
            "from": {"date": "2021-07-01", "time": "10:00"},
            "to": {"date": "2021-07-05", "time": "19:00"}
        }));
        then.status(200).json_body(json!("vc-2"));
    });

    let client = client(&server);
    let message_id = client
        .add_message_voice_campaign(&VoiceCampaignMessage {
            name: "promo".into(),
            audio_file: "audio-1".into(),
            phones: vec!["+79001112233".into()],
            phone_number: "+74950000000".into(),
            schedule: schedule(),
            from: from.clone(),
            to: to.clone(),
            abonent: None,
        })
        .unwrap();
    let question_id = client
        .add_question_voice_campaign(&VoiceCampaignQuestion {
            name: "survey".into(),
            answers: vec![Answer {
                choice: "1".into(),
                answer: "201".into(),
            }],
            audio_file: "audio-1".into(),
            phones: vec!["+79001112233".into()],
            phone_number: "+74950000000".into(),
            schedule: schedule(),
            from,
            to,
            abonent: None,
        })
        .unwrap();

    assert_eq!(message_id, "vc-1");
    assert_eq!(question_id, "vc-2");
    message.assert();
    question.assert();
}

#[test]
fn campaign_lifecycle() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(portal_path("vc"));
        then.status(200).json_body(json!([campaign_json("promo")]));
    });
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path(portal_path("vc/vc-1"))
            .json_body(campaign_json("promo v2"));
        then.status(200);
    });
    let start = server.mock(|when, then| {
        when.method(PUT).path(portal_path("vc/start/vc-1"));
        then.status(200);
    });
    let stop = server.mock(|when, then| {
        when.method(PUT).path(portal_path("vc/stop/vc-1"));
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(GET).path(portal_path("vc/info/vc-1"));
        then.status(200).json_body(json!({
            "name": "promo v2",
            "status": "STOPPED",
            "type": "MESSAGE",
            "numbers": [{"phone": "+79001112233", "status": "DONE", "tryCount": 1}]
        }));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path(portal_path("vc/vc-1"));
        then.status(204);
    });

    let client = client(&server);
    let mut campaign = client.get_voice_campaigns().unwrap().remove(0);
    assert_eq!(campaign.campaign_type, CampaignType::Message);
    assert_eq!(campaign.from.date, window().0.date);

    campaign.name = "promo v2".into();
    client.update_voice_campaign("vc-1", &campaign).unwrap();
    client.start_voice_campaign("vc-1").unwrap();
    client.stop_voice_campaign("vc-1").unwrap();

    let report = client.get_voice_campaign_info("vc-1").unwrap();
    assert_eq!(report.status, "STOPPED");
    assert_eq!(report.numbers[0].try_count, Some(1));
    assert_eq!(report.numbers[0].last_call_date, None);

    client.delete_voice_campaign("vc-1").unwrap();

    for mock in [update, start, stop, delete] {
        mock.assert();
    }
}
