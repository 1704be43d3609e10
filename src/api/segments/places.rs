//
//  graph-client
//  api/segments/places.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Rooms and room lists under `/places`.

use super::{action, read, write};
use crate::api::common::{ApiResult, Payload};
use crate::api::endpoint::{Endpoint, ResponseShape::*, Segment};
use crate::api::models::places::Place;
use crate::api::query::{self, QueryOptions};
use crate::api::transport::Transport;

const S: Segment = Segment::Places;

endpoint_table! {
    LIST_ROOMS = Endpoint::get(S, "list_rooms", "/places/microsoft.graph.room")
        .query(query::LIST).returns(Collection).summary("List rooms");
    GET_ROOM_COUNT = Endpoint::get(S, "get_room_count", "/places/microsoft.graph.room/$count")
        .query(query::COUNT).returns(Count).summary("Count rooms");
    LIST_ROOM_LISTS = Endpoint::get(S, "list_room_lists", "/places/microsoft.graph.roomList")
        .query(query::LIST).returns(Collection).summary("List room lists");
    GET_ROOM_LIST_COUNT = Endpoint::get(S, "get_room_list_count", "/places/microsoft.graph.roomList/$count")
        .query(query::COUNT).returns(Count).summary("Count room lists");
    GET_PLACES_COUNT = Endpoint::get(S, "get_places_count", "/places/$count")
        .query(query::COUNT).returns(Count).summary("Count places");
    GET_PLACE_AS_ROOM = Endpoint::get(S, "get_place_as_room", "/places/{place_id}/microsoft.graph.room")
        .query(query::GET).summary("Get a place cast to a room");
    GET_PLACE_AS_ROOM_LIST = Endpoint::get(S, "get_place_as_room_list", "/places/{place_id}/microsoft.graph.roomList")
        .query(query::GET).summary("Get a place cast to a room list");
    UPDATE_PLACE = Endpoint::patch(S, "update_place", "/places/{place_id}")
        .summary("Update a room or room list");
    DELETE_PLACE = Endpoint::delete(S, "delete_place", "/places/{place_id}")
        .summary("Delete a place");
    LIST_ROOM_LIST_ROOMS = Endpoint::get(S, "list_room_list_rooms", "/places/{place_id}/microsoft.graph.roomList/rooms")
        .query(query::LIST).returns(Collection).summary("List the rooms in a room list");
    CREATE_ROOM_LIST_ROOM = Endpoint::post(S, "create_room_list_room", "/places/{place_id}/microsoft.graph.roomList/rooms")
        .summary("Add a room to a room list");
    GET_ROOM_LIST_ROOM_COUNT = Endpoint::get(S, "get_room_list_room_count", "/places/{place_id}/microsoft.graph.roomList/rooms/$count")
        .query(query::COUNT).returns(Count).summary("Count the rooms in a room list");
    GET_ROOM_LIST_ROOM = Endpoint::get(S, "get_room_list_room", "/places/{place_id}/microsoft.graph.roomList/rooms/{room_id}")
        .query(query::GET).summary("Get a room in a room list");
    UPDATE_ROOM_LIST_ROOM = Endpoint::patch(S, "update_room_list_room", "/places/{place_id}/microsoft.graph.roomList/rooms/{room_id}")
        .summary("Update a room in a room list");
    DELETE_ROOM_LIST_ROOM = Endpoint::delete(S, "delete_room_list_room", "/places/{place_id}/microsoft.graph.roomList/rooms/{room_id}")
        .summary("Remove a room from a room list");
}

/// Endpoints under `/places`.
///
/// # Example
///
/// ```rust,no_run
/// use graph_client::api::models::places::Place;
/// use graph_client::api::GraphClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = GraphClient::graph()?;
/// let patch = Place { display_name: Some("Room A".into()), ..Place::room() };
/// client.places().update_place("3162F1E1-C4C0-604B-51D8-91DA78989EB1", &patch).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct Places<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Places<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    pub async fn list_rooms(&self, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &LIST_ROOMS, &[], query).await
    }

    pub async fn get_room_count(&self, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_ROOM_COUNT, &[], query).await
    }

    pub async fn list_room_lists(&self, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &LIST_ROOM_LISTS, &[], query).await
    }

    pub async fn get_room_list_count(&self, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_ROOM_LIST_COUNT, &[], query).await
    }

    pub async fn get_places_count(&self, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_PLACES_COUNT, &[], query).await
    }

    pub async fn get_place_as_room(&self, place_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_PLACE_AS_ROOM, &[place_id], query).await
    }

    pub async fn get_place_as_room_list(
        &self,
        place_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_PLACE_AS_ROOM_LIST, &[place_id], query).await
    }

    /// `PATCH /places/{place_id}` with only the supplied fields.
    pub async fn update_place(&self, place_id: &str, body: &Place) -> ApiResult<Payload> {
        write(self.transport, &UPDATE_PLACE, &[place_id], body).await
    }

    pub async fn delete_place(&self, place_id: &str) -> ApiResult<Payload> {
        action(self.transport, &DELETE_PLACE, &[place_id]).await
    }

    pub async fn list_room_list_rooms(
        &self,
        place_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_ROOM_LIST_ROOMS, &[place_id], query).await
    }

    pub async fn create_room_list_room(&self, place_id: &str, body: &Place) -> ApiResult<Payload> {
        write(self.transport, &CREATE_ROOM_LIST_ROOM, &[place_id], body).await
    }

    pub async fn get_room_list_room_count(
        &self,
        place_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_ROOM_LIST_ROOM_COUNT, &[place_id], query).await
    }

    pub async fn get_room_list_room(
        &self,
        place_id: &str,
        room_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_ROOM_LIST_ROOM, &[place_id, room_id], query).await
    }

    pub async fn update_room_list_room(
        &self,
        place_id: &str,
        room_id: &str,
        body: &Place,
    ) -> ApiResult<Payload> {
        write(self.transport, &UPDATE_ROOM_LIST_ROOM, &[place_id, room_id], body).await
    }

    pub async fn delete_room_list_room(&self, place_id: &str, room_id: &str) -> ApiResult<Payload> {
        action(self.transport, &DELETE_ROOM_LIST_ROOM, &[place_id, room_id]).await
    }
}
