//! 埋め込みマップHTMLテンプレート
//!
//! ファイルシステム参照なしでバイナリに直接同梱できるよう
//! `&'static str` で保持する。`__MARKERS__` / `__CENTER__` /
//! `__ZOOM__` を置換して使う。

pub const MAP_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Geo Predictions</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <style>
    html,
    body {
      height: 100%;
      margin: 0;
    }

    #map {
      height: 100%;
      width: 100%;
    }
  </style>
</head>

<body>
  <div id="map"></div>

  <script>
    const markers = __MARKERS__;

    const map = L.map('map', { center: __CENTER__, zoom: __ZOOM__ });

    L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);

    for (const marker of markers) {
      L.circleMarker([marker.lat, marker.lng], {
        radius: 8,
        color: marker.color,
        fillColor: marker.color,
        fillOpacity: 0.85
      }).bindPopup(marker.popup).addTo(map);
    }
  </script>
</body>

</html>
"#;
