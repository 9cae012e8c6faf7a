mod common;

use beeline_portal::{IcrRouteRule, SubscriptionRequest, SubscriptionType};
use common::{client, portal_path};
use httpmock::prelude::*;
use serde_json::json;

#[test]
fn subscription_lifecycle() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(PUT).path(portal_path("subscription")).json_body(json!({
            "pattern": "2310",
            "expires": 3600,
            "subscriptionType": "BASIC_CALL",
            "url": "https://hooks.example/pbx"
        }));
        then.status(200)
            .json_body(json!({"subscriptionId": "sub-1", "expires": 3600}));
    });
    let get = server.mock(|when, then| {
        when.method(GET)
            .path(portal_path("subscription"))
            .query_param("subscriptionId", "sub-1");
        then.status(200).json_body(json!({
            "subscriptionId": "sub-1",
            "targetType": "ABONENT",
            "targetId": "9379992@beeline.ru",
            "subscriptionType": "BASIC_CALL",
            "expires": 3500,
            "url": "https://hooks.example/pbx"
        }));
    });
    let stop = server.mock(|when, then| {
        when.method(DELETE)
            .path(portal_path("subscription"))
            .query_param("subscriptionId", "sub-1");
        then.status(200);
    });

    let client = client(&server);
    let created = client
        .create_subscription(&SubscriptionRequest {
            pattern: "2310".into(),
            expires: 3600,
            subscription_type: SubscriptionType::BasicCall,
            url: "https://hooks.example/pbx".into(),
        })
        .unwrap();
    assert_eq!(created.subscription_id, "sub-1");

    let subscription = client.get_subscription(&created.subscription_id).unwrap();
    assert_eq!(subscription.target_type, "ABONENT");
    assert_eq!(subscription.expires, 3500);

    client.stop_subscription("sub-1").unwrap();

    create.assert();
    get.assert();
    stop.assert();
}

#[test]
fn icr_numbers_are_switched_with_json_lists() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(portal_path("icr/numbers"));
        then.status(200)
            .json_body(json!([{"numberId": "n1", "phone": "74950000000"}]));
    });
    let enable = server.mock(|when, then| {
        when.method(PUT)
            .path(portal_path("icr/numbers"))
            .json_body(json!(["74950000000", "74950000001"]));
        then.status(200).json_body(json!([
            {"phoneNumber": "74950000000", "status": "SUCCESS"},
            {"phoneNumber": "74950000001", "status": "FAULT",
             "error": {"errorCode": "NotFound", "description": "unknown number"}}
        ]));
    });
    let stop = server.mock(|when, then| {
        when.method(DELETE)
            .path(portal_path("icr/numbers"))
            .json_body(json!(["74950000000"]));
        then.status(200)
            .json_body(json!([{"phoneNumber": "74950000000", "status": "SUCCESS"}]));
    });

    let client = client(&server);
    assert_eq!(client.get_icr_numbers().unwrap()[0].number_id, "n1");

    let results = client
        .enable_icr_for_numbers(&["74950000000", "74950000001"])
        .unwrap();
    assert_eq!(results[0].error, None);
    assert_eq!(
        results[1].error.as_ref().and_then(|e| e.description.as_deref()),
        Some("unknown number")
    );

    let stopped = client.stop_icr_for_numbers(&["74950000000"]).unwrap();
    assert_eq!(stopped[0].status, "SUCCESS");

    enable.assert();
    stop.assert();
}

#[test]
fn icr_route_rules_use_one_verb_per_change() {
    let server = MockServer::start();
    let rule = IcrRouteRule {
        inbound_number: "74950000000".into(),
        extension: "201".into(),
    };
    let rules_json = json!([{"inboundNumber": "74950000000", "extension": "201"}]);
    let results_json = json!([{
        "rule": {"inboundNumber": "74950000000", "extension": "201"},
        "status": "SUCCESS"
    }]);

    server.mock(|when, then| {
        when.method(GET).path(portal_path("icr/route"));
        then.status(200).json_body(rules_json.clone());
    });
    let mut changes = Vec::new();
    for method in [POST, PUT, DELETE] {
        changes.push(server.mock(|when, then| {
            when.method(method)
                .path(portal_path("icr/route"))
                .json_body(rules_json.clone());
            then.status(200).json_body(results_json.clone());
        }));
    }

    let client = client(&server);
    assert_eq!(client.get_icr_route_rules().unwrap(), vec![rule.clone()]);

    let rules = [rule];
    let added = client.add_icr_route_rules(&rules).unwrap();
    let updated = client.update_icr_route_rules(&rules).unwrap();
    let deleted = client.delete_icr_route_rules(&rules).unwrap();
    for results in [added, updated, deleted] {
        assert_eq!(results[0].rule, rules[0]);
        assert_eq!(results[0].status, "SUCCESS");
    }

    for change in changes {
        change.assert();
    }
}
